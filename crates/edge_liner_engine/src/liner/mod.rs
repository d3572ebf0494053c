//! Liner: verbindet Evaluatoren, Längenmessung und Kanten-Funktion.
//!
//! Jede Operation leitet die Kontrollpunkte ab, misst die Kurve, kürzt sie
//! optional auf ein Limit und übergibt sie an den [`DrawHandler`]:
//! - **Fast Path** (keine Kante): native Kurvenparameter, der Handler zeichnet exakt.
//! - **Slow Path** (Kante gesetzt): Abtastung in Längeneinheiten, jeder Punkt
//!   senkrecht ausgelenkt, Ausgabe als Polylinie über `line_or_move_to`.
//!
//! Aufgeteilt in:
//! - `line`: Linien (polar und absolut)
//! - `bezier`: quadratische und kubische Bézier-Kurven (polar und absolut)
//! - `arc`: Ellipsenbögen inkl. Winkel-Normalisierung

mod arc;
mod bezier;
mod line;

pub use arc::arrange_sweep;

use crate::angle;
use crate::area::AreaAccumulator;
use crate::curve::CurveSpec;
use crate::edge::EdgeFn;
use crate::length::{approximate, sample_count, LengthResult};
use glam::DVec2;

/// Standard-Normalenversatz (Grad): die "äußere" Seite liegt 90° gegen den Uhrzeigersinn.
pub const DEFAULT_NORMAL_DIRECTION_OFFSET: f64 = -90.0;

/// Parameter eines Ellipsenbogens für [`DrawHandler::arc_or_move_to`].
///
/// Winkel in Radiant (Canvas-`ellipse()`-Konvention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: DVec2,
    pub rotation: f64,
    pub radii: DVec2,
    pub start_angle: f64,
    pub end_angle: f64,
    pub anticlockwise: bool,
}

/// Zeichenfläche, an die der Liner seine Ausgabe übergibt.
///
/// Implementiert von Adaptern (Canvas/SVG, Turtle-Zustand, Pfad-Aufzeichnung).
/// Ob ein Aufruf zeichnet oder nur bewegt, entscheidet der Handler
/// (z.B. anhand des Pen-Zustands). `end_dir` ist immer in Grad.
pub trait DrawHandler {
    fn line_or_move_to(&mut self, to: DVec2, end_dir: f64);

    fn quad_curve_or_move_to(&mut self, handle: DVec2, to: DVec2, end_dir: f64);

    fn bezier_curve_or_move_to(&mut self, handle1: DVec2, handle2: DVec2, to: DVec2, end_dir: f64);

    /// `end` ist der Endpunkt des Bogens, damit der Handler ihn nicht neu berechnen muss.
    fn arc_or_move_to(&mut self, arc: &ArcSegment, end_dir: f64, end: DVec2);
}

impl<H: DrawHandler + ?Sized> DrawHandler for &mut H {
    fn line_or_move_to(&mut self, to: DVec2, end_dir: f64) {
        (**self).line_or_move_to(to, end_dir);
    }

    fn quad_curve_or_move_to(&mut self, handle: DVec2, to: DVec2, end_dir: f64) {
        (**self).quad_curve_or_move_to(handle, to, end_dir);
    }

    fn bezier_curve_or_move_to(&mut self, handle1: DVec2, handle2: DVec2, to: DVec2, end_dir: f64) {
        (**self).bezier_curve_or_move_to(handle1, handle2, to, end_dir);
    }

    fn arc_or_move_to(&mut self, arc: &ArcSegment, end_dir: f64, end: DVec2) {
        (**self).arc_or_move_to(arc, end_dir, end);
    }
}

/// Orchestrator für Linien, Bézier-Kurven und Bögen.
pub struct Liner<H> {
    handler: H,
    /// Winkelversatz (Grad) von der Tangente zur Auslenkungsrichtung
    normal_direction_offset: f64,
    edge: Option<EdgeFn>,
    /// Stützstellen pro Längeneinheit (1.0 = kompatibles `ceil(Schätzung)`)
    sample_density: f64,
}

impl<H: DrawHandler> Liner<H> {
    pub fn new(handler: H) -> Self {
        Self::with_normal_direction_offset(handler, DEFAULT_NORMAL_DIRECTION_OFFSET)
    }

    pub fn with_normal_direction_offset(handler: H, normal_direction_offset: f64) -> Self {
        Self {
            handler,
            normal_direction_offset,
            edge: None,
            sample_density: 1.0,
        }
    }

    /// Setzt die Kanten-Funktion; `None` schaltet auf den Fast Path zurück.
    pub fn set_edge(&mut self, edge: Option<EdgeFn>) {
        self.edge = edge;
    }

    pub fn edge(&self) -> Option<&EdgeFn> {
        self.edge.as_ref()
    }

    pub fn set_normal_direction_offset(&mut self, deg: f64) {
        self.normal_direction_offset = deg;
    }

    pub fn normal_direction_offset(&self) -> f64 {
        self.normal_direction_offset
    }

    /// Stützstellen pro Längeneinheit; nicht-positive Werte werden ignoriert.
    pub fn set_sample_density(&mut self, density: f64) {
        if density.is_finite() && density > 0.0 {
            self.sample_density = density;
        } else {
            log::warn!("Ungültige Abtastdichte {} ignoriert", density);
        }
    }

    pub fn sample_density(&self) -> f64 {
        self.sample_density
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Misst eine Kurve mit der aktuellen Abtastdichte.
    fn measure(
        &self,
        curve: &CurveSpec,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> LengthResult {
        let n = sample_count(curve.rough_span(), self.sample_density);
        approximate(curve.start(), |t, _| curve.point_at(t), n, limit, area)
    }

    /// Gemeinsamer Ablauf für Bézier-Kurven und Bögen: messen, kürzen, ausgeben.
    fn draw_curve(
        &mut self,
        curve: CurveSpec,
        limit: Option<f64>,
        area: Option<&mut AreaAccumulator>,
    ) -> f64 {
        let len = self.measure(&curve, limit, area);
        let drawn = if len.truncation_param < 1.0 {
            curve.truncated(len.truncation_param)
        } else {
            curve
        };
        // Auf t = 0 gekürzt fallen alle Punkte zusammen, die Richtung kommt vom Anfang
        let end_dir = if len.truncation_param > 0.0 {
            drawn.end_direction()
        } else {
            curve.start_direction()
        };

        if self.edge.is_some() {
            self.emit_distorted(&drawn, None, len.limited_length, len.total_length, end_dir);
        } else {
            self.emit_native(&drawn, end_dir);
        }
        len.limited_length
    }

    /// Fast Path: native Kurvenparameter an den Handler.
    fn emit_native(&mut self, curve: &CurveSpec, end_dir: f64) {
        log::trace!("Fast Path: {:?}", curve);
        match *curve {
            CurveSpec::Line { to, .. } => self.handler.line_or_move_to(to, end_dir),
            CurveSpec::QuadraticBezier { handle, to, .. } => {
                self.handler.quad_curve_or_move_to(handle, to, end_dir)
            }
            CurveSpec::CubicBezier {
                handle1,
                handle2,
                to,
                ..
            } => self
                .handler
                .bezier_curve_or_move_to(handle1, handle2, to, end_dir),
            CurveSpec::EllipticalArc {
                center,
                rotation,
                rx,
                ry,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                let arc = ArcSegment {
                    center,
                    rotation,
                    radii: DVec2::new(rx, ry),
                    start_angle,
                    end_angle,
                    anticlockwise,
                };
                self.handler.arc_or_move_to(&arc, end_dir, curve.end());
            }
        }
    }

    /// Slow Path: Kurve in Längeneinheiten abtasten und jeden Punkt auslenken.
    ///
    /// `fixed_tangent` (Linien) ersetzt die Tangentenschätzung aus den
    /// Nachbarpunkten. Die Kante bekommt die ungekürzte Gesamtlänge, damit
    /// ein gekürzter Strich ein Präfix des vollständigen ist.
    fn emit_distorted(
        &mut self,
        curve: &CurveSpec,
        fixed_tangent: Option<f64>,
        limited_length: f64,
        total_length: f64,
        end_dir: f64,
    ) {
        let Some(edge) = self.edge.clone() else {
            self.emit_native(curve, end_dir);
            return;
        };
        let n = sample_count(limited_length, self.sample_density);
        log::debug!(
            "Slow Path: {} Stützstellen (Länge {:.3} von {:.3})",
            n,
            limited_length,
            total_length
        );

        let mut prev = curve.start();
        let mut current = curve.point_at(1.0 / n as f64);
        let mut cumulative = 0.0;
        for i in 1..=n {
            cumulative += prev.distance(current);
            let next = (i < n).then(|| curve.point_at((i + 1) as f64 / n as f64));

            let tangent = fixed_tangent.unwrap_or_else(|| {
                let ahead = next.unwrap_or(current);
                if prev.distance_squared(ahead) > 0.0 {
                    angle::direction(prev, ahead)
                } else {
                    end_dir
                }
            });
            let offset = edge(cumulative, total_length);
            let normal = angle::unit(tangent + self.normal_direction_offset);
            let dir = if i == n { end_dir } else { tangent };
            self.handler.line_or_move_to(current + normal * offset, dir);

            prev = current;
            if let Some(p) = next {
                current = p;
            }
        }
    }
}
