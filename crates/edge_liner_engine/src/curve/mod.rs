//! Kurven-Evaluatoren: Parameter t ∈ [0, 1] → 2D-Punkt.
//!
//! Alle Evaluatoren bekommen `t` und `tp = 1 - t`, damit die Bernstein-Basis
//! ohne erneute Subtraktion ausgewertet wird.

use crate::angle;
use glam::DVec2;

/// Kleinster zulässiger Betrag eines Ellipsenradius.
///
/// Kompatibilitätsdetail, kein Tuning-Parameter: Radien nahe 0 werden
/// vorzeichenerhaltend auf diesen Wert geklemmt, damit die Tangente
/// berechenbar bleibt. Negative Radien (gespiegelte Bögen) bleiben erlaubt.
pub const RADIUS_EPSILON: f64 = 1e-13;

/// Klemmt einen Radius vorzeichenerhaltend auf mindestens [`RADIUS_EPSILON`].
pub fn clamp_radius(r: f64) -> f64 {
    if r.abs() < RADIUS_EPSILON {
        if r.is_sign_negative() {
            -RADIUS_EPSILON
        } else {
            RADIUS_EPSILON
        }
    } else {
        r
    }
}

/// Lineare Interpolation der Endpunkte.
#[inline]
pub fn line_point(p0: DVec2, p1: DVec2, t: f64, tp: f64) -> DVec2 {
    tp * p0 + t * p1
}

/// B(t) = tp²·P0 + 2·t·tp·P1 + t²·P2
#[inline]
pub fn quadratic_point(p0: DVec2, p1: DVec2, p2: DVec2, t: f64, tp: f64) -> DVec2 {
    let k0 = tp * tp;
    let k1 = 2.0 * t * tp;
    let k2 = t * t;
    k0 * p0 + k1 * p1 + k2 * p2
}

/// B(t) = tp³·P0 + 3·t·tp²·P1 + 3·t²·tp·P2 + t³·P3
#[inline]
pub fn cubic_point(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64, tp: f64) -> DVec2 {
    let k0 = tp * tp * tp;
    let k1 = 3.0 * t * tp * tp;
    let k2 = 3.0 * t * t * tp;
    let k3 = t * t * t;
    k0 * p0 + k1 * p1 + k2 * p2 + k3 * p3
}

/// Punkt auf einem gedrehten Ellipsenbogen.
///
/// Der Bogenwinkel wird linear zwischen `start_angle` und `end_angle`
/// interpoliert; `rotation` dreht die Ellipse um ihren Mittelpunkt.
/// Alle Winkel in Radiant.
#[inline]
pub fn arc_point(
    center: DVec2,
    rotation: f64,
    radii: DVec2,
    start_angle: f64,
    end_angle: f64,
    t: f64,
    tp: f64,
) -> DVec2 {
    let r = tp * start_angle + t * end_angle;
    let (sin_r, cos_r) = r.sin_cos();
    let (sin_th, cos_th) = rotation.sin_cos();
    let (rx, ry) = (radii.x, radii.y);
    DVec2::new(
        center.x + (rx * cos_r) * cos_th - (ry * sin_r) * sin_th,
        center.y + (rx * cos_r) * sin_th + (ry * sin_r) * cos_th,
    )
}

/// Beschreibung einer einzelnen Kurve, pro Zeichenaufruf neu erzeugt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSpec {
    Line {
        from: DVec2,
        to: DVec2,
    },
    QuadraticBezier {
        from: DVec2,
        handle: DVec2,
        to: DVec2,
    },
    CubicBezier {
        from: DVec2,
        handle1: DVec2,
        handle2: DVec2,
        to: DVec2,
    },
    /// Winkel in Radiant; Radien sind bereits per [`clamp_radius`] geklemmt.
    EllipticalArc {
        center: DVec2,
        rotation: f64,
        rx: f64,
        ry: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    },
}

impl CurveSpec {
    /// Erstellt einen Ellipsenbogen und klemmt dabei beide Radien.
    #[allow(clippy::too_many_arguments)]
    pub fn arc(
        center: DVec2,
        rotation: f64,
        rx: f64,
        ry: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) -> Self {
        Self::EllipticalArc {
            center,
            rotation,
            rx: clamp_radius(rx),
            ry: clamp_radius(ry),
            start_angle,
            end_angle,
            anticlockwise,
        }
    }

    /// Wertet die Kurve bei `t` aus.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let tp = 1.0 - t;
        match *self {
            Self::Line { from, to } => line_point(from, to, t, tp),
            Self::QuadraticBezier { from, handle, to } => {
                quadratic_point(from, handle, to, t, tp)
            }
            Self::CubicBezier {
                from,
                handle1,
                handle2,
                to,
            } => cubic_point(from, handle1, handle2, to, t, tp),
            Self::EllipticalArc {
                center,
                rotation,
                rx,
                ry,
                start_angle,
                end_angle,
                ..
            } => arc_point(
                center,
                rotation,
                DVec2::new(rx, ry),
                start_angle,
                end_angle,
                t,
                tp,
            ),
        }
    }

    pub fn start(&self) -> DVec2 {
        match *self {
            Self::Line { from, .. }
            | Self::QuadraticBezier { from, .. }
            | Self::CubicBezier { from, .. } => from,
            Self::EllipticalArc { .. } => self.point_at(0.0),
        }
    }

    pub fn end(&self) -> DVec2 {
        match *self {
            Self::Line { to, .. } | Self::QuadraticBezier { to, .. } | Self::CubicBezier { to, .. } => {
                to
            }
            Self::EllipticalArc { .. } => self.point_at(1.0),
        }
    }

    /// Grobe Längenschätzung (obere Schranke) zur Bemessung der Abtastrate.
    ///
    /// Linie: exakte Länge. Bézier: Länge des Kontrollpolygons.
    /// Bogen: mittlerer Radius × überstrichener Winkel.
    pub fn rough_span(&self) -> f64 {
        match *self {
            Self::Line { from, to } => from.distance(to),
            Self::QuadraticBezier { from, handle, to } => {
                from.distance(handle) + handle.distance(to)
            }
            Self::CubicBezier {
                from,
                handle1,
                handle2,
                to,
            } => from.distance(handle1) + handle1.distance(handle2) + handle2.distance(to),
            Self::EllipticalArc {
                rx,
                ry,
                start_angle,
                end_angle,
                ..
            } => (rx.abs() + ry.abs()) * 0.5 * (end_angle - start_angle).abs(),
        }
    }

    /// Liefert das Teilstück [0, t] als Kurve derselben Art.
    ///
    /// Bézier-Segmente per De-Casteljau-Teilung, Bögen per Interpolation
    /// des Endwinkels, Linien per Interpolation des Endpunkts.
    pub fn truncated(&self, t: f64) -> Self {
        let tp = 1.0 - t;
        match *self {
            Self::Line { from, to } => Self::Line {
                from,
                to: line_point(from, to, t, tp),
            },
            Self::QuadraticBezier { from, handle, to } => Self::QuadraticBezier {
                from,
                handle: line_point(from, handle, t, tp),
                to: quadratic_point(from, handle, to, t, tp),
            },
            Self::CubicBezier {
                from,
                handle1,
                handle2,
                to,
            } => {
                let p01 = line_point(from, handle1, t, tp);
                let p12 = line_point(handle1, handle2, t, tp);
                let p23 = line_point(handle2, to, t, tp);
                let p012 = line_point(p01, p12, t, tp);
                let p123 = line_point(p12, p23, t, tp);
                Self::CubicBezier {
                    from,
                    handle1: p01,
                    handle2: p012,
                    to: line_point(p012, p123, t, tp),
                }
            }
            Self::EllipticalArc {
                center,
                rotation,
                rx,
                ry,
                start_angle,
                end_angle,
                anticlockwise,
            } => Self::EllipticalArc {
                center,
                rotation,
                rx,
                ry,
                start_angle,
                end_angle: tp * start_angle + t * end_angle,
                anticlockwise,
            },
        }
    }

    /// Tangentenrichtung am Kurvenende in Grad.
    pub fn end_direction(&self) -> f64 {
        match *self {
            Self::Line { from, to } => angle::direction(from, to),
            Self::QuadraticBezier { from, handle, to } => {
                angle::direction(last_distinct(&[from, handle], to), to)
            }
            Self::CubicBezier {
                from,
                handle1,
                handle2,
                to,
            } => angle::direction(last_distinct(&[from, handle1, handle2], to), to),
            Self::EllipticalArc {
                rotation,
                rx,
                ry,
                end_angle,
                anticlockwise,
                ..
            } => arc_tangent(rotation, rx, ry, end_angle, anticlockwise),
        }
    }

    /// Tangentenrichtung am Kurvenanfang in Grad.
    ///
    /// Für Kurven, die auf t = 0 gekürzt wurden und deshalb keine eigene
    /// Endrichtung mehr haben.
    pub fn start_direction(&self) -> f64 {
        match *self {
            Self::Line { from, to } => angle::direction(from, to),
            Self::QuadraticBezier { from, handle, to } => {
                angle::direction(from, first_distinct(from, &[handle, to]))
            }
            Self::CubicBezier {
                from,
                handle1,
                handle2,
                to,
            } => angle::direction(from, first_distinct(from, &[handle1, handle2, to])),
            Self::EllipticalArc {
                rotation,
                rx,
                ry,
                start_angle,
                anticlockwise,
                ..
            } => arc_tangent(rotation, rx, ry, start_angle, anticlockwise),
        }
    }
}

/// Tangente (Grad) des Ellipsenbogens beim Bogenwinkel `r` in Laufrichtung.
fn arc_tangent(rotation: f64, rx: f64, ry: f64, r: f64, anticlockwise: bool) -> f64 {
    let (sin_r, cos_r) = r.sin_cos();
    let deg = ((ry * cos_r).atan2(-rx * sin_r) + rotation).to_degrees();
    if anticlockwise { deg + 180.0 } else { deg }
}

/// Erster Kontrollpunkt, der nicht mit `start` zusammenfällt.
fn first_distinct(start: DVec2, points: &[DVec2]) -> DVec2 {
    points
        .iter()
        .copied()
        .find(|p| *p != start)
        .unwrap_or(start)
}

/// Letzter Kontrollpunkt, der nicht mit `end` zusammenfällt.
///
/// Fallen alle zusammen, wird der erste Punkt geliefert (Richtung 0).
fn last_distinct(points: &[DVec2], end: DVec2) -> DVec2 {
    points
        .iter()
        .rev()
        .copied()
        .find(|p| *p != end)
        .unwrap_or(points[0])
}
