//! Laufzeit-Konfiguration des Liners.
//!
//! `LinerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{Context, Result};
use edge_liner_engine::{DrawHandler, EdgeConfig, EdgeFn, Liner, DEFAULT_NORMAL_DIRECTION_OFFSET};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "edge_liner.toml";

// ── Abtastung ───────────────────────────────────────────────────────

/// Stützstellen pro Längeneinheit bei Messung und Verzerrung.
pub const SAMPLE_DENSITY: f64 = 1.0;

// ── Turtle ──────────────────────────────────────────────────────────

/// Skalierung aller Turtle-Längen und -Radien.
pub const TURTLE_STEP: f64 = 1.0;

/// Alle zur Laufzeit änderbaren Liner-Optionen.
/// Wird als [`CONFIG_FILE_NAME`] neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinerOptions {
    /// Winkelversatz (Grad) von der Tangente zur Auslenkungsrichtung
    #[serde(default = "default_normal_direction_offset")]
    pub normal_direction_offset: f64,
    /// Stützstellen pro Längeneinheit (Genauigkeit gegen Laufzeit)
    #[serde(default = "default_sample_density")]
    pub sample_density: f64,
    /// Turtle-Schrittweite
    #[serde(default = "default_step")]
    pub step: f64,
    /// Kanten-Verzerrung; fehlt sie, wird unverzerrt gezeichnet
    #[serde(default)]
    pub edge: Option<EdgeConfig>,
}

impl Default for LinerOptions {
    fn default() -> Self {
        Self {
            normal_direction_offset: DEFAULT_NORMAL_DIRECTION_OFFSET,
            sample_density: SAMPLE_DENSITY,
            step: TURTLE_STEP,
            edge: None,
        }
    }
}

/// Serde-Default für `normal_direction_offset` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_normal_direction_offset() -> f64 {
    DEFAULT_NORMAL_DIRECTION_OFFSET
}

fn default_sample_density() -> f64 {
    SAMPLE_DENSITY
}

fn default_step() -> f64 {
    TURTLE_STEP
}

impl LinerOptions {
    /// Lädt Optionen aus einer TOML-Datei.
    ///
    /// Eine fehlende Datei ergibt Standardwerte, eine fehlerhafte ist ein Fehler.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!(
                "Keine Optionen unter {} gefunden, verwende Standardwerte",
                path.display()
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen nicht lesbar: {}", path.display()))?;
        let options: Self = toml::from_str(&content)
            .with_context(|| format!("Optionen fehlerhaft: {}", path.display()))?;
        log::info!("Optionen geladen aus: {}", path.display());
        Ok(options)
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::debug!("Optionen gespeichert: {}", path.display());
        Ok(())
    }

    /// `edge_liner.toml` im Verzeichnis der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(CONFIG_FILE_NAME)
    }

    /// Kanten-Funktion laut Konfiguration (`None` = unverzerrt).
    pub fn build_edge(&self) -> Option<EdgeFn> {
        self.edge.as_ref().and_then(EdgeConfig::build)
    }

    /// Überträgt Normalenversatz, Abtastdichte und Kante auf einen Liner.
    pub fn apply<H: DrawHandler>(&self, liner: &mut Liner<H>) {
        liner.set_normal_direction_offset(self.normal_direction_offset);
        liner.set_sample_density(self.sample_density);
        liner.set_edge(self.build_edge());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge_liner_engine::EdgeShape;

    #[test]
    fn test_missing_fields_take_defaults() {
        let opts: LinerOptions = toml::from_str("step = 2.5").expect("gültiges TOML");
        assert_eq!(opts.step, 2.5);
        assert_eq!(opts.normal_direction_offset, DEFAULT_NORMAL_DIRECTION_OFFSET);
        assert_eq!(opts.sample_density, SAMPLE_DENSITY);
        assert!(opts.edge.is_none());
    }

    #[test]
    fn test_edge_table_parses() {
        let opts: LinerOptions = toml::from_str(
            r#"
            [edge]
            shape = "abs_sine"
            length = 12.0
            amplitude = 3.0

            [edge.options]
            centering = true
            "#,
        )
        .expect("gültiges TOML");
        let edge = opts.edge.as_ref().expect("Kante konfiguriert");
        assert_eq!(edge.shape, EdgeShape::AbsSine);
        assert!(edge.options.centering);
        assert!(opts.build_edge().is_some());
    }

    #[test]
    fn test_toml_roundtrip() {
        let opts = LinerOptions {
            sample_density: 4.0,
            ..LinerOptions::default()
        };
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: LinerOptions = toml::from_str(&text).expect("wieder lesbar");
        assert_eq!(back, opts);
    }

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("edge_liner_{}_{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_file("fehlt");
        let _ = std::fs::remove_file(&path);
        let opts = LinerOptions::load_from_file(&path).expect("fehlende Datei ist kein Fehler");
        assert_eq!(opts, LinerOptions::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path = temp_file("kaputt");
        std::fs::write(&path, "sample_density = \"viel\"").expect("Testdatei schreibbar");
        let err = LinerOptions::load_from_file(&path).expect_err("ungültiger Typ");
        let _ = std::fs::remove_file(&path);
        assert!(format!("{:#}", err).contains("Optionen fehlerhaft"), "{:#}", err);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_file("speichern");
        let opts = LinerOptions {
            step: 3.0,
            ..LinerOptions::default()
        };
        opts.save_to_file(&path).expect("speicherbar");
        let back = LinerOptions::load_from_file(&path).expect("ladbar");
        let _ = std::fs::remove_file(&path);
        assert_eq!(back, opts);
    }
}
