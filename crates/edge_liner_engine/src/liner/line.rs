//! Linien: polar (Start + Richtung + Länge) und absolut (Start + Ende).

use super::{DrawHandler, Liner};
use crate::angle;
use crate::area::AreaAccumulator;
use crate::curve::CurveSpec;
use glam::DVec2;

impl<H: DrawHandler> Liner<H> {
    /// Linie ab (`x`, `y`) in Richtung `dir` (Grad) über `dist`.
    ///
    /// Negative Längen zeichnen rückwärts, die Richtung bleibt `dir`.
    /// Liefert die gezeichnete Länge.
    pub fn line(
        &mut self,
        x: f64,
        y: f64,
        dir: f64,
        dist: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let from = DVec2::new(x, y);
        let to = from + angle::unit(dir) * dist;
        self.draw_line(from, to, dir, limit, area)
    }

    /// Linie von (`x0`, `y0`) nach (`x1`, `y1`).
    pub fn line_abs(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let from = DVec2::new(x0, y0);
        let to = DVec2::new(x1, y1);
        self.draw_line(from, to, angle::direction(from, to), limit, area)
    }

    fn draw_line(
        &mut self,
        from: DVec2,
        to: DVec2,
        dir: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let curve = CurveSpec::Line { from, to };
        // Messung nur für die Flächen-Akkumulation; Länge und Kürzung sind bei Linien exakt
        if area.is_some() {
            self.measure(&curve, limit, area);
        }
        let total = from.distance(to);
        let (limited, t) = match limit {
            Some(l) if l < total => {
                let limited = l.max(0.0);
                let t = if total > 0.0 { limited / total } else { 0.0 };
                (limited, t)
            }
            _ => (total, 1.0),
        };
        let drawn = if t < 1.0 { curve.truncated(t) } else { curve };

        if self.edge.is_some() {
            self.emit_distorted(&drawn, Some(dir), limited, total, dir);
        } else {
            self.emit_native(&drawn, dir);
        }
        limited
    }
}
