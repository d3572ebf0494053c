//! Winkel-Hilfsfunktionen (Grad ↔ Radiant, Normalisierung).

use glam::DVec2;

/// Normalisiert einen Winkel (Grad) in den Bereich (-180, 180].
///
/// Negative und beliebig große Werte werden per Modulo eingefaltet.
pub fn normalize_degree(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Einheitsvektor in Richtung `deg` (Grad).
#[inline]
pub fn unit(deg: f64) -> DVec2 {
    let r = deg.to_radians();
    DVec2::new(r.cos(), r.sin())
}

/// Richtung des Vektors `to - from` in Grad.
#[inline]
pub fn direction(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_degree_range() {
        assert_relative_eq!(normalize_degree(0.0), 0.0);
        assert_relative_eq!(normalize_degree(180.0), 180.0);
        assert_relative_eq!(normalize_degree(-180.0), 180.0);
        assert_relative_eq!(normalize_degree(190.0), -170.0);
        assert_relative_eq!(normalize_degree(-190.0), 170.0);
        assert_relative_eq!(normalize_degree(720.0 + 45.0), 45.0);
        assert_relative_eq!(normalize_degree(-720.0 - 45.0), -45.0);
    }

    #[test]
    fn test_direction_axes() {
        assert_relative_eq!(direction(DVec2::ZERO, DVec2::new(1.0, 0.0)), 0.0);
        assert_relative_eq!(direction(DVec2::ZERO, DVec2::new(0.0, 1.0)), 90.0);
        assert_relative_eq!(direction(DVec2::ZERO, DVec2::new(-1.0, 0.0)), 180.0);
    }
}
