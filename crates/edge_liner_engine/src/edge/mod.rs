//! Kanten-Funktionen: periodische Querauslenkung entlang einer Kurve.
//!
//! Eine [`EdgeFn`] bildet `(position, total_length)` auf einen vorzeichenbehafteten
//! Versatz senkrecht zur Kurve ab. `None` ist der "keine Kante"-Wächter:
//! die Kurve wird dann nativ an den Handler durchgereicht.

pub mod shape;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kanten-Funktion `(position, total_length) -> Versatz`.
pub type EdgeFn = Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>;

/// Stützstellen für die numerische Mittelwertbildung beim Zentrieren.
const MEAN_SAMPLES: usize = 1024;

/// Optionen einer Kanten-Funktion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    /// Gleichanteil entfernen, damit die Welle um 0 pendelt
    pub centering: bool,
    /// Welle gespiegelt ablaufen lassen (Start am fallenden Nulldurchgang, Vorzeichen negiert)
    pub reverse: bool,
    /// Vorzeichen der Amplitude umkehren
    pub flip: bool,
    /// Phasenversatz als Anteil einer Periode
    pub phase: f64,
}

impl Default for EdgeOptions {
    fn default() -> Self {
        Self {
            centering: false,
            reverse: false,
            flip: false,
            phase: 0.0,
        }
    }
}

/// Phase in [0, 1) einfalten.
fn wrap_unit(x: f64) -> f64 {
    let r = x.rem_euclid(1.0);
    if r >= 1.0 { 0.0 } else { r }
}

/// Effektive Periode: mindestens eine volle Periode, leicht gestreckt,
/// damit die Kurve ohne angebrochene Restperiode gekachelt wird.
pub fn effective_period(length: f64, total_length: f64) -> f64 {
    if total_length.is_nan() || total_length <= 0.0 {
        return length.abs();
    }
    if length.is_nan() || length <= 0.0 {
        return total_length;
    }
    let count = (total_length / length).floor().max(1.0);
    total_length / count
}

/// Gemeinsamer Baustein aller Kanten-Funktionen.
///
/// `shape` bildet die Phase auf [-1, 1] ab, `min_phase`/`max_phase` sind
/// steigender bzw. fallender Nulldurchgang. Der Versatz ergibt sich zu
/// `(shape(φ)·reverse_sign + centering_offset) · amplitude/2 · flip_sign`.
pub fn make_edge<F>(
    length: f64,
    amplitude: f64,
    options: EdgeOptions,
    shape: F,
    min_phase: f64,
    max_phase: f64,
) -> EdgeFn
where
    F: Fn(f64) -> f64 + Send + Sync + 'static,
{
    let reverse_sign = if options.reverse { -1.0 } else { 1.0 };
    let flip_sign = if options.flip { -1.0 } else { 1.0 };
    let centering_offset = if options.centering {
        let mean = (0..MEAN_SAMPLES)
            .map(|i| shape((i as f64 + 0.5) / MEAN_SAMPLES as f64))
            .sum::<f64>()
            / MEAN_SAMPLES as f64;
        -mean * reverse_sign
    } else {
        0.0
    };
    let half_amp = amplitude / 2.0;

    Arc::new(move |position: f64, total_length: f64| {
        let period = effective_period(length, total_length);
        if !period.is_finite() || period <= 0.0 {
            return 0.0;
        }
        let local = position.rem_euclid(period) / period + options.phase;
        let phase = if options.reverse {
            wrap_unit(max_phase - local)
        } else {
            wrap_unit(min_phase + local)
        };
        (shape(phase) * reverse_sign + centering_offset) * half_amp * flip_sign
    })
}

/// Wächter "keine Kante": Kurven werden unverzerrt gezeichnet.
pub fn normal_edge() -> Option<EdgeFn> {
    None
}

pub fn sine_edge(length: f64, amplitude: f64, options: EdgeOptions) -> Option<EdgeFn> {
    Some(make_edge(length, amplitude, options, shape::sine, 0.0, 0.5))
}

pub fn square_edge(length: f64, amplitude: f64, options: EdgeOptions) -> Option<EdgeFn> {
    Some(make_edge(length, amplitude, options, shape::square, 0.0, 0.5))
}

pub fn triangle_edge(length: f64, amplitude: f64, options: EdgeOptions) -> Option<EdgeFn> {
    Some(make_edge(length, amplitude, options, shape::triangle, 0.0, 0.5))
}

pub fn sawtooth_edge(length: f64, amplitude: f64, options: EdgeOptions) -> Option<EdgeFn> {
    Some(make_edge(length, amplitude, options, shape::sawtooth, 0.0, 0.5))
}

pub fn abs_sine_edge(length: f64, amplitude: f64, options: EdgeOptions) -> Option<EdgeFn> {
    Some(make_edge(
        length,
        amplitude,
        options,
        shape::abs_sine,
        0.0,
        shape::ABS_SINE_MAX_PHASE,
    ))
}

/// Verfügbare Wellenformen (für Konfigurationsdateien).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeShape {
    /// Keine Verzerrung
    #[default]
    Normal,
    Sine,
    Square,
    Triangle,
    Sawtooth,
    AbsSine,
}

/// Serialisierbare Beschreibung einer Kanten-Funktion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub shape: EdgeShape,
    /// Wellenlänge (Soll-Periode) in Längeneinheiten
    pub length: f64,
    /// Spitze-Spitze-Amplitude
    pub amplitude: f64,
    #[serde(default)]
    pub options: EdgeOptions,
}

impl EdgeConfig {
    /// Baut die Kanten-Funktion; [`EdgeShape::Normal`] ergibt `None`.
    pub fn build(&self) -> Option<EdgeFn> {
        let (length, amplitude, options) = (self.length, self.amplitude, self.options);
        match self.shape {
            EdgeShape::Normal => normal_edge(),
            EdgeShape::Sine => sine_edge(length, amplitude, options),
            EdgeShape::Square => square_edge(length, amplitude, options),
            EdgeShape::Triangle => triangle_edge(length, amplitude, options),
            EdgeShape::Sawtooth => sawtooth_edge(length, amplitude, options),
            EdgeShape::AbsSine => abs_sine_edge(length, amplitude, options),
        }
    }
}
