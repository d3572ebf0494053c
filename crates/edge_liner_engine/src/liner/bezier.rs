//! Quadratische und kubische Bézier-Kurven.
//!
//! Polare Form: ab dem Startpunkt werden Kontrollpunkte über verkettete
//! (Richtung, Länge)-Schritte erzeugt. Jeder relative Winkel `degN` dreht
//! die laufende Richtung weiter.

use super::{DrawHandler, Liner};
use crate::angle;
use crate::area::AreaAccumulator;
use crate::curve::CurveSpec;
use glam::DVec2;

impl<H: DrawHandler> Liner<H> {
    /// Quadratische Kurve: Handle bei `dist0` in Richtung `dir + deg0`,
    /// Endpunkt `dist1` weiter nach zusätzlicher Drehung um `deg1`.
    #[allow(clippy::too_many_arguments)]
    pub fn quad_curve(
        &mut self,
        x: f64,
        y: f64,
        dir: f64,
        dist0: f64,
        deg0: f64,
        dist1: f64,
        deg1: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let from = DVec2::new(x, y);
        let r0 = dir + deg0;
        let handle = from + angle::unit(r0) * dist0;
        let r1 = r0 + deg1;
        let to = handle + angle::unit(r1) * dist1;
        self.draw_curve(CurveSpec::QuadraticBezier { from, handle, to }, limit, area)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quad_curve_abs(
        &mut self,
        x0: f64,
        y0: f64,
        hx: f64,
        hy: f64,
        x1: f64,
        y1: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let curve = CurveSpec::QuadraticBezier {
            from: DVec2::new(x0, y0),
            handle: DVec2::new(hx, hy),
            to: DVec2::new(x1, y1),
        };
        self.draw_curve(curve, limit, area)
    }

    /// Kubische Kurve aus drei verketteten (Länge, relativer Winkel)-Schritten.
    #[allow(clippy::too_many_arguments)]
    pub fn bezier_curve(
        &mut self,
        x: f64,
        y: f64,
        dir: f64,
        dist0: f64,
        deg0: f64,
        dist1: f64,
        deg1: f64,
        dist2: f64,
        deg2: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let from = DVec2::new(x, y);
        let r0 = dir + deg0;
        let handle1 = from + angle::unit(r0) * dist0;
        let r1 = r0 + deg1;
        let handle2 = handle1 + angle::unit(r1) * dist1;
        let r2 = r1 + deg2;
        let to = handle2 + angle::unit(r2) * dist2;
        let curve = CurveSpec::CubicBezier {
            from,
            handle1,
            handle2,
            to,
        };
        self.draw_curve(curve, limit, area)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn bezier_curve_abs(
        &mut self,
        x0: f64,
        y0: f64,
        h1x: f64,
        h1y: f64,
        h2x: f64,
        h2y: f64,
        x1: f64,
        y1: f64,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let curve = CurveSpec::CubicBezier {
            from: DVec2::new(x0, y0),
            handle1: DVec2::new(h1x, h1y),
            handle2: DVec2::new(h2x, h2y),
            to: DVec2::new(x1, y1),
        };
        self.draw_curve(curve, limit, area)
    }
}
