//! Turtle-Zustand als Handler-Schicht.

use super::Surface;
use edge_liner_engine::angle::normalize_degree;
use edge_liner_engine::{ArcSegment, DrawHandler};
use glam::DVec2;

/// Verfolgt Position und Richtung des Stifts und leitet an ein [`Surface`] weiter.
///
/// Bei gehobenem Stift wird jeder Zeichenaufruf zur Bewegung (`move_to`)
/// an den Endpunkt. Die Richtung übernimmt immer `end_dir` des Aufrufs.
#[derive(Debug, Clone)]
pub struct PenTracker<S> {
    inner: S,
    position: DVec2,
    /// Grad, normalisiert nach (-180, 180]
    heading: f64,
    pen_down: bool,
}

impl<S: Surface> PenTracker<S> {
    pub fn new(inner: S, position: DVec2, heading: f64) -> Self {
        Self {
            inner,
            position,
            heading: normalize_degree(heading),
            pen_down: true,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn set_pen_down(&mut self, down: bool) {
        self.pen_down = down;
    }

    /// Springt ohne zu zeichnen an `to`.
    pub fn jump_to(&mut self, to: DVec2) {
        self.inner.move_to(to);
        self.position = to;
    }

    pub fn set_heading(&mut self, deg: f64) {
        self.heading = normalize_degree(deg);
    }

    /// Dreht im Uhrzeigersinn (Bildschirm-Koordinaten, y nach unten).
    pub fn turn(&mut self, deg: f64) {
        self.set_heading(self.heading + deg);
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn arrive(&mut self, to: DVec2, end_dir: f64) {
        self.position = to;
        self.heading = normalize_degree(end_dir);
    }
}

impl<S: Surface> DrawHandler for PenTracker<S> {
    fn line_or_move_to(&mut self, to: DVec2, end_dir: f64) {
        if self.pen_down {
            self.inner.line_or_move_to(to, end_dir);
        } else {
            self.inner.move_to(to);
        }
        self.arrive(to, end_dir);
    }

    fn quad_curve_or_move_to(&mut self, handle: DVec2, to: DVec2, end_dir: f64) {
        if self.pen_down {
            self.inner.quad_curve_or_move_to(handle, to, end_dir);
        } else {
            self.inner.move_to(to);
        }
        self.arrive(to, end_dir);
    }

    fn bezier_curve_or_move_to(&mut self, handle1: DVec2, handle2: DVec2, to: DVec2, end_dir: f64) {
        if self.pen_down {
            self.inner
                .bezier_curve_or_move_to(handle1, handle2, to, end_dir);
        } else {
            self.inner.move_to(to);
        }
        self.arrive(to, end_dir);
    }

    fn arc_or_move_to(&mut self, arc: &ArcSegment, end_dir: f64, end: DVec2) {
        if self.pen_down {
            self.inner.arc_or_move_to(arc, end_dir, end);
        } else {
            self.inner.move_to(end);
        }
        self.arrive(end, end_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{PathCommand, PolylineRecorder};

    #[test]
    fn test_pen_up_turns_draws_into_moves() {
        let mut tracker = PenTracker::new(PolylineRecorder::new(DVec2::ZERO), DVec2::ZERO, 0.0);
        tracker.set_pen_down(false);
        tracker.line_or_move_to(DVec2::new(10.0, 0.0), 0.0);
        tracker.set_pen_down(true);
        tracker.line_or_move_to(DVec2::new(10.0, 10.0), 90.0);

        assert_eq!(
            tracker.inner().commands(),
            &[
                PathCommand::MoveTo(DVec2::new(10.0, 0.0)),
                PathCommand::LineTo {
                    to: DVec2::new(10.0, 10.0),
                    end_dir: 90.0
                },
            ]
        );
        assert_eq!(tracker.position(), DVec2::new(10.0, 10.0));
        assert_eq!(tracker.heading(), 90.0);
    }

    #[test]
    fn test_heading_is_normalized() {
        let mut tracker = PenTracker::new(PolylineRecorder::default(), DVec2::ZERO, 270.0);
        assert_eq!(tracker.heading(), -90.0);
        tracker.turn(-135.0);
        assert_eq!(tracker.heading(), 135.0);
        tracker.line_or_move_to(DVec2::ONE, 540.0);
        assert_eq!(tracker.heading(), 180.0);
    }
}
