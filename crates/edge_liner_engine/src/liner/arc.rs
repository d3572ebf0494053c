//! Ellipsenbögen inkl. Normalisierung des Winkelbereichs.

use super::{DrawHandler, Liner};
use crate::angle::normalize_degree;
use crate::area::AreaAccumulator;
use crate::curve::CurveSpec;
use glam::DVec2;

/// Bringt Start- und Endwinkel (Grad) in eine monotone Überstreichung der gewünschten Richtung.
///
/// Beide Winkel werden nach (-180, 180] normalisiert. Gegen den Uhrzeigersinn
/// muss der Endwinkel kleiner als der Startwinkel sein, sonst größer. Fallen
/// beide zusammen, wird ein Vollkreis statt eines Bogens der Länge 0 gezeichnet.
pub fn arrange_sweep(start_deg: f64, end_deg: f64, anticlockwise: bool) -> (f64, f64) {
    let start = normalize_degree(start_deg);
    let mut end = normalize_degree(end_deg);

    if start == end {
        log::debug!("Bogen mit identischen Winkeln ({}°) → Vollkreis", start);
        end = if anticlockwise { start - 360.0 } else { start + 360.0 };
    } else if anticlockwise {
        while end > start {
            end -= 360.0;
        }
    } else {
        while end < start {
            end += 360.0;
        }
    }
    (start, end)
}

impl<H: DrawHandler> Liner<H> {
    /// Ellipsenbogen um (`cx`, `cy`), um `dir` (Grad) gedreht.
    ///
    /// Radien nahe 0 werden geklemmt, negative Radien spiegeln den Bogen.
    /// Liefert die gezeichnete Länge.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        &mut self,
        cx: f64,
        cy: f64,
        dir: f64,
        rx: f64,
        ry: f64,
        start_deg: f64,
        end_deg: f64,
        anticlockwise: bool,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let (start, end) = arrange_sweep(start_deg, end_deg, anticlockwise);
        let curve = CurveSpec::arc(
            DVec2::new(cx, cy),
            dir.to_radians(),
            rx,
            ry,
            start.to_radians(),
            end.to_radians(),
            anticlockwise,
        );
        self.draw_curve(curve, limit, area)
    }
}
