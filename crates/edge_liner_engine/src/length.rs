//! Längenapproximation über Polylinien-Unterteilung.

use crate::area::AreaAccumulator;
use glam::DVec2;

/// Ergebnis einer Längenmessung.
///
/// Invariante: `limited_length <= total_length`; ohne Limit gilt
/// `limited_length == total_length` und `truncation_param == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthResult {
    /// Ungekürzte Länge der gesamten Kurve
    pub total_length: f64,
    /// Länge bis zum Kürzungsparameter
    pub limited_length: f64,
    /// Kurvenparameter t, an dem die Kürzung greift (Abtast-Auflösung)
    pub truncation_param: f64,
}

/// Abtastanzahl aus einer groben Längenschätzung: `max(1, ceil(span · density))`.
///
/// Mit `density = 1.0` etwa eine Stützstelle pro Längeneinheit.
pub fn sample_count(rough_span: f64, density: f64) -> usize {
    let n = (rough_span.abs() * density).ceil();
    if n.is_finite() && n >= 1.0 {
        n as usize
    } else {
        1
    }
}

/// Misst die Kurve `eval` ab dem Startpunkt `start` mit `sample_count` Segmenten.
///
/// `eval(t, 1 - t)` liefert den Kurvenpunkt bei `t`. Wird `limit` erreicht,
/// merkt sich die Funktion `(span, t)` der ersten Überschreitung, misst aber
/// weiter, um auch die Gesamtlänge zu liefern. Ein optionaler
/// [`AreaAccumulator`] nimmt den Startpunkt und jede Stützstelle der ganzen
/// Kurve auf, das Limit wirkt nur auf `(limited_length, truncation_param)`.
pub fn approximate(
    start: DVec2,
    eval: impl Fn(f64, f64) -> DVec2,
    sample_count: usize,
    limit: Option<f64>,
    mut area: Option<&mut AreaAccumulator>,
) -> LengthResult {
    let n = sample_count.max(1);
    if let Some(acc) = area.as_deref_mut() {
        acc.fold(start);
    }

    // Nicht-positives Limit: nichts zeichnen
    let mut truncation = match limit {
        Some(l) if l <= 0.0 => Some((0.0, 0.0)),
        _ => None,
    };

    let mut span = 0.0;
    let mut prev = start;
    for i in 1..=n {
        let t = i as f64 / n as f64;
        let p = eval(t, 1.0 - t);
        span += prev.distance(p);
        prev = p;

        if let Some(acc) = area.as_deref_mut() {
            acc.fold(p);
        }
        if truncation.is_none() && limit.is_some_and(|l| span >= l) {
            truncation = Some((span, t));
        }
    }

    let (limited_length, truncation_param) = truncation.unwrap_or((span, 1.0));
    LengthResult {
        total_length: span,
        limited_length: limited_length.min(span),
        truncation_param,
    }
}
