//! Turtle-Sitzung über einem [`Liner`].
//!
//! Der Stift liefert die polaren Eingaben (Position, Richtung, Schrittweite)
//! und führt pro Pen-Down-Strich einen eigenen [`AreaAccumulator`].

use crate::adapters::{PenTracker, Surface};
use crate::shared::LinerOptions;
use anyhow::{Context, Result};
use edge_liner_engine::{arrange_arc_params, ArcArg, AreaAccumulator, EdgeFn, Liner};
use glam::DVec2;

/// Turtle mit Stift-Zustand, Schrittweite und Flächen-Buchführung.
pub struct Pen<S> {
    liner: Liner<PenTracker<S>>,
    /// Skalierung aller Längen- und Radius-Argumente
    step: f64,
    stroke: AreaAccumulator,
    finished: Vec<AreaAccumulator>,
}

impl<S: Surface> Pen<S> {
    /// Neuer Stift bei `position`, Blickrichtung `heading` (Grad), Stift unten.
    pub fn new(surface: S, position: DVec2, heading: f64) -> Self {
        Self {
            liner: Liner::new(PenTracker::new(surface, position, heading)),
            step: 1.0,
            stroke: AreaAccumulator::new(),
            finished: Vec::new(),
        }
    }

    pub fn with_options(surface: S, position: DVec2, heading: f64, options: &LinerOptions) -> Self {
        let mut pen = Self::new(surface, position, heading);
        options.apply(&mut pen.liner);
        pen.set_step(options.step);
        pen
    }

    pub fn position(&self) -> DVec2 {
        self.liner.handler().position()
    }

    pub fn heading(&self) -> f64 {
        self.liner.handler().heading()
    }

    pub fn is_pen_down(&self) -> bool {
        self.liner.handler().is_pen_down()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Nicht-endliche Schrittweiten werden ignoriert.
    pub fn set_step(&mut self, step: f64) {
        if step.is_finite() {
            self.step = step;
        } else {
            log::warn!("Ungültige Schrittweite {} ignoriert", step);
        }
    }

    pub fn set_edge(&mut self, edge: Option<EdgeFn>) {
        self.liner.set_edge(edge);
    }

    pub fn liner(&self) -> &Liner<PenTracker<S>> {
        &self.liner
    }

    pub fn liner_mut(&mut self) -> &mut Liner<PenTracker<S>> {
        &mut self.liner
    }

    pub fn pen_down(&mut self) {
        self.liner.handler_mut().set_pen_down(true);
    }

    /// Hebt den Stift und schließt den laufenden Strich ab.
    pub fn pen_up(&mut self) {
        self.finish_stroke();
        self.liner.handler_mut().set_pen_down(false);
    }

    /// Springt ohne zu zeichnen; ein laufender Strich wird abgeschlossen.
    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.finish_stroke();
        self.liner.handler_mut().jump_to(DVec2::new(x, y));
    }

    pub fn set_heading(&mut self, deg: f64) {
        self.liner.handler_mut().set_heading(deg);
    }

    /// Dreht um `deg` Grad (positiv = im Uhrzeigersinn auf dem Bildschirm).
    pub fn turn(&mut self, deg: f64) {
        self.liner.handler_mut().turn(deg);
    }

    /// Gerade Strecke in Blickrichtung. Liefert die gezeichnete Länge.
    pub fn forward(&mut self, dist: f64, limit: Option<f64>) -> f64 {
        let (pos, heading) = (self.position(), self.heading());
        let area = self.is_pen_down().then_some(&mut self.stroke);
        self.liner
            .line(pos.x, pos.y, heading, dist * self.step, limit, area)
    }

    /// Quadratische Kurve aus zwei (Länge, relativer Winkel)-Schritten.
    pub fn curve(
        &mut self,
        dist0: f64,
        deg0: f64,
        dist1: f64,
        deg1: f64,
        limit: Option<f64>,
    ) -> f64 {
        let (pos, heading, step) = (self.position(), self.heading(), self.step);
        let area = self.is_pen_down().then_some(&mut self.stroke);
        self.liner.quad_curve(
            pos.x,
            pos.y,
            heading,
            dist0 * step,
            deg0,
            dist1 * step,
            deg1,
            limit,
            area,
        )
    }

    /// Kubische Kurve aus drei (Länge, relativer Winkel)-Schritten.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier(
        &mut self,
        dist0: f64,
        deg0: f64,
        dist1: f64,
        deg1: f64,
        dist2: f64,
        deg2: f64,
        limit: Option<f64>,
    ) -> f64 {
        let (pos, heading, step) = (self.position(), self.heading(), self.step);
        let area = self.is_pen_down().then_some(&mut self.stroke);
        self.liner.bezier_curve(
            pos.x,
            pos.y,
            heading,
            dist0 * step,
            deg0,
            dist1 * step,
            deg1,
            dist2 * step,
            deg2,
            limit,
            area,
        )
    }

    /// Bogen ab der aktuellen Position, tangential zur Blickrichtung bei Startwinkel 0.
    ///
    /// Positive Überstreichung (`end - start`) läuft im Uhrzeigersinn.
    /// Eine Überstreichung von 0 zeichnet nichts.
    pub fn arc(&mut self, radius: ArcArg<'_>, degree: ArcArg<'_>, limit: Option<f64>) -> Result<f64> {
        let params = arrange_arc_params(radius, degree, self.step)
            .context("Bogen-Argumente konnten nicht ausgewertet werden")?;
        if params.end_deg == params.start_deg {
            log::debug!("Bogen ohne Überstreichung übersprungen");
            return Ok(0.0);
        }

        let anticlockwise = params.end_deg < params.start_deg;
        let rotation = if anticlockwise {
            self.heading() + 90.0
        } else {
            self.heading() - 90.0
        };
        let start = params.start_deg.to_radians();
        let local = DVec2::new(params.rx * start.cos(), params.ry * start.sin());
        let center = self.position() - DVec2::from_angle(rotation.to_radians()).rotate(local);

        let area = self.is_pen_down().then_some(&mut self.stroke);
        Ok(self.liner.arc(
            center.x,
            center.y,
            rotation,
            params.rx,
            params.ry,
            params.start_deg,
            params.end_deg,
            anticlockwise,
            limit,
            area,
        ))
    }

    /// Fläche des laufenden Strichs.
    pub fn current_stroke(&self) -> &AreaAccumulator {
        &self.stroke
    }

    /// Abgeschlossene Striche in Zeichenreihenfolge.
    pub fn finished_strokes(&self) -> &[AreaAccumulator] {
        &self.finished
    }

    /// Gemeinsame Bounding-Box aller Striche (min, max).
    pub fn bounds(&self) -> Option<(DVec2, DVec2)> {
        self.finished
            .iter()
            .chain(std::iter::once(&self.stroke))
            .filter_map(AreaAccumulator::bounds)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }

    /// Schließt den letzten Strich ab und gibt Zeichenziel und Striche zurück.
    pub fn finish(mut self) -> (S, Vec<AreaAccumulator>) {
        self.finish_stroke();
        (self.liner.into_handler().into_inner(), self.finished)
    }

    fn finish_stroke(&mut self) {
        if !self.stroke.is_empty() {
            log::trace!("Strich abgeschlossen: {:?}", self.stroke.bounds());
            self.finished.push(std::mem::take(&mut self.stroke));
        }
    }
}
