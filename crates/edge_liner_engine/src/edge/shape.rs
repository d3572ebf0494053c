//! Wellenformen für Kanten-Funktionen.
//!
//! Jede Form bildet die Phase φ ∈ [0, 1) auf [-1, 1] ab; φ = 0 ist ein
//! steigender Nulldurchgang. Sprungstellen sind durch kurze lineare Rampen
//! ersetzt, damit aus der verzerrten Kurve berechnete Tangenten endlich bleiben.

use std::f64::consts::{FRAC_PI_6, PI, TAU};

/// Breite einer Sprung-Rampe als Anteil der Periode.
pub const RAMP_WIDTH: f64 = 0.01;

const HALF_RAMP: f64 = RAMP_WIDTH / 2.0;

pub fn sine(phase: f64) -> f64 {
    (TAU * phase).sin()
}

pub fn square(phase: f64) -> f64 {
    if phase < HALF_RAMP {
        phase / HALF_RAMP
    } else if phase < 0.5 - HALF_RAMP {
        1.0
    } else if phase < 0.5 + HALF_RAMP {
        (0.5 - phase) / HALF_RAMP
    } else if phase < 1.0 - HALF_RAMP {
        -1.0
    } else {
        (phase - 1.0) / HALF_RAMP
    }
}

pub fn triangle(phase: f64) -> f64 {
    if phase < 0.25 {
        4.0 * phase
    } else if phase < 0.75 {
        2.0 - 4.0 * phase
    } else {
        4.0 * phase - 4.0
    }
}

/// Steigt langsam von 0 auf 1, fällt über eine Rampe auf -1, steigt zurück auf 0.
pub fn sawtooth(phase: f64) -> f64 {
    let rise = 0.5 - HALF_RAMP;
    if phase < rise {
        phase / rise
    } else if phase < 0.5 + HALF_RAMP {
        (0.5 - phase) / HALF_RAMP
    } else {
        (phase - 1.0) / rise
    }
}

/// Gleichgerichteter Sinus, so verschoben, dass φ = 0 auf 0 fällt.
pub fn abs_sine(phase: f64) -> f64 {
    (PI * phase + FRAC_PI_6).sin().abs() * 2.0 - 1.0
}

/// Fallender Nulldurchgang von [`abs_sine`].
pub const ABS_SINE_MAX_PHASE: f64 = 2.0 / 3.0;
