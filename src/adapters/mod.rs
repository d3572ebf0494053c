//! Adapter zwischen [`Liner`](edge_liner_engine::Liner) und Zeichenzielen.
//!
//! - `recorder`: Aufzeichnung aller Aufrufe im Speicher (Tests, Nachbearbeitung)
//! - `svg`: Aufbau eines SVG-`d`-Attributs
//! - `tracker`: Turtle-Zustand (Position, Richtung, Stift oben/unten)

mod recorder;
mod svg;
mod tracker;

pub use recorder::{PathCommand, PolylineRecorder};
pub use svg::SvgPathWriter;
pub use tracker::PenTracker;

use edge_liner_engine::DrawHandler;
use glam::DVec2;

/// Zeichenziel, das zusätzlich reine Bewegungen kennt.
///
/// [`PenTracker`] leitet bei gehobenem Stift jeden Aufruf als `move_to` weiter.
pub trait Surface: DrawHandler {
    fn move_to(&mut self, to: DVec2);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn move_to(&mut self, to: DVec2) {
        (**self).move_to(to);
    }
}
