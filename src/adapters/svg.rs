//! SVG-Pfad als Zeichenziel.
//!
//! Bildet die Canvas2D-Pfad-Aufrufe auf `d`-Kommandos ab (`M`, `L`, `Q`, `C`, `A`).

use super::Surface;
use edge_liner_engine::curve::arc_point;
use edge_liner_engine::{ArcSegment, DrawHandler};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Toleranz, unter der zwei Punkte als identisch gelten.
const POINT_EPSILON: f64 = 1e-9;

/// Baut das `d`-Attribut eines SVG-Pfads auf.
#[derive(Debug, Clone)]
pub struct SvgPathWriter {
    d: String,
    current: DVec2,
    /// Nachkommastellen der ausgegebenen Koordinaten
    precision: usize,
}

impl SvgPathWriter {
    pub fn new(start: DVec2) -> Self {
        Self::with_precision(start, 3)
    }

    pub fn with_precision(start: DVec2, precision: usize) -> Self {
        let mut writer = Self {
            d: String::new(),
            current: start,
            precision,
        };
        writer.push('M', &[start.x, start.y]);
        writer
    }

    pub fn path_data(&self) -> &str {
        &self.d
    }

    pub fn current(&self) -> DVec2 {
        self.current
    }

    /// Vollständiges SVG-Dokument mit einem Pfad.
    ///
    /// `bounds` (min, max) bestimmt die viewBox, erweitert um `margin`.
    pub fn to_document(&self, bounds: Option<(DVec2, DVec2)>, margin: f64) -> String {
        let (min, max) = bounds.unwrap_or((self.current, self.current));
        let origin = min - DVec2::splat(margin);
        let size = (max - min + DVec2::splat(2.0 * margin)).max(DVec2::ONE);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n  \
             <path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"1\"/>\n</svg>\n",
            self.fmt(origin.x),
            self.fmt(origin.y),
            self.fmt(size.x),
            self.fmt(size.y),
            self.d
        )
    }

    fn fmt(&self, v: f64) -> String {
        let s = format!("{:.*}", self.precision, v);
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }

    fn push(&mut self, cmd: char, values: &[f64]) {
        if !self.d.is_empty() {
            self.d.push(' ');
        }
        self.d.push(cmd);
        for (i, v) in values.iter().enumerate() {
            self.d.push(if i == 0 { ' ' } else { ',' });
            let text = self.fmt(*v);
            self.d.push_str(&text);
        }
    }

    /// `A`-Kommando; Flags werden als 0/1 ausgegeben.
    fn push_arc(&mut self, radii: DVec2, rotation_deg: f64, large: bool, sweep: bool, to: DVec2) {
        let flags = [f64::from(u8::from(large)), f64::from(u8::from(sweep))];
        self.push(
            'A',
            &[radii.x, radii.y, rotation_deg, flags[0], flags[1], to.x, to.y],
        );
        self.current = to;
    }
}

impl DrawHandler for SvgPathWriter {
    fn line_or_move_to(&mut self, to: DVec2, _end_dir: f64) {
        self.push('L', &[to.x, to.y]);
        self.current = to;
    }

    fn quad_curve_or_move_to(&mut self, handle: DVec2, to: DVec2, _end_dir: f64) {
        self.push('Q', &[handle.x, handle.y, to.x, to.y]);
        self.current = to;
    }

    fn bezier_curve_or_move_to(&mut self, handle1: DVec2, handle2: DVec2, to: DVec2, _end_dir: f64) {
        self.push(
            'C',
            &[handle1.x, handle1.y, handle2.x, handle2.y, to.x, to.y],
        );
        self.current = to;
    }

    fn arc_or_move_to(&mut self, arc: &ArcSegment, _end_dir: f64, end: DVec2) {
        let at = |t: f64| {
            arc_point(
                arc.center,
                arc.rotation,
                arc.radii,
                arc.start_angle,
                arc.end_angle,
                t,
                1.0 - t,
            )
        };
        // Canvas2D verbindet den aktuellen Punkt mit dem Bogenanfang
        let start = at(0.0);
        if self.current.distance(start) > POINT_EPSILON {
            self.push('L', &[start.x, start.y]);
            self.current = start;
        }

        let sweep = arc.end_angle - arc.start_angle;
        if sweep.abs() <= POINT_EPSILON {
            return;
        }
        // Ein negativer Radius spiegelt die Ellipse und kehrt damit den Umlaufsinn um
        let mirrored = (arc.radii.x < 0.0) != (arc.radii.y < 0.0);
        let sweep_flag = !arc.anticlockwise != mirrored;
        let radii = arc.radii.abs();
        let rotation_deg = arc.rotation.to_degrees();

        if sweep.abs() >= TAU - POINT_EPSILON {
            // SVG kann keinen geschlossenen Bogen: in zwei Hälften teilen
            self.push_arc(radii, rotation_deg, false, sweep_flag, at(0.5));
            self.push_arc(radii, rotation_deg, false, sweep_flag, end);
        } else {
            self.push_arc(radii, rotation_deg, sweep.abs() > PI, sweep_flag, end);
        }
    }
}

impl Surface for SvgPathWriter {
    fn move_to(&mut self, to: DVec2) {
        self.push('M', &[to.x, to.y]);
        self.current = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn quarter(anticlockwise: bool, radii: DVec2) -> ArcSegment {
        ArcSegment {
            center: DVec2::ZERO,
            rotation: 0.0,
            radii,
            start_angle: 0.0,
            end_angle: if anticlockwise { -FRAC_PI_2 } else { FRAC_PI_2 },
            anticlockwise,
        }
    }

    #[test]
    fn test_line_and_move_commands() {
        let mut w = SvgPathWriter::new(DVec2::new(1.0, 2.5));
        w.line_or_move_to(DVec2::new(10.0, -0.0001), 0.0);
        w.move_to(DVec2::new(3.0, 4.0));
        assert_eq!(w.path_data(), "M 1,2.5 L 10,0 M 3,4");
    }

    #[test]
    fn test_curve_commands() {
        let mut w = SvgPathWriter::new(DVec2::ZERO);
        w.quad_curve_or_move_to(DVec2::new(1.0, 1.0), DVec2::new(2.0, 0.0), 0.0);
        w.bezier_curve_or_move_to(
            DVec2::new(3.0, 1.0),
            DVec2::new(4.0, 1.0),
            DVec2::new(5.0, 0.0),
            0.0,
        );
        assert_eq!(w.path_data(), "M 0,0 Q 1,1,2,0 C 3,1,4,1,5,0");
    }

    #[test]
    fn test_arc_connects_to_start_and_sets_sweep_flag() {
        let mut w = SvgPathWriter::new(DVec2::ZERO);
        w.arc_or_move_to(&quarter(false, DVec2::splat(5.0)), 180.0, DVec2::new(0.0, 5.0));
        assert_eq!(w.path_data(), "M 0,0 L 5,0 A 5,5,0,0,1,0,5");

        let mut w = SvgPathWriter::new(DVec2::new(5.0, 0.0));
        w.arc_or_move_to(&quarter(true, DVec2::splat(5.0)), 0.0, DVec2::new(0.0, -5.0));
        assert_eq!(w.path_data(), "M 5,0 A 5,5,0,0,0,0,-5");
    }

    #[test]
    fn test_mirrored_radius_flips_sweep() {
        let mut w = SvgPathWriter::new(DVec2::new(-5.0, 0.0));
        w.arc_or_move_to(&quarter(false, DVec2::new(-5.0, 5.0)), 0.0, DVec2::new(0.0, 5.0));
        assert_eq!(w.path_data(), "M -5,0 A 5,5,0,0,0,0,5");
    }

    #[test]
    fn test_full_circle_split_in_halves() {
        let arc = ArcSegment {
            end_angle: TAU,
            ..quarter(false, DVec2::splat(5.0))
        };
        let mut w = SvgPathWriter::new(DVec2::new(5.0, 0.0));
        w.arc_or_move_to(&arc, 90.0, DVec2::new(5.0, 0.0));
        assert_eq!(w.path_data(), "M 5,0 A 5,5,0,0,1,-5,0 A 5,5,0,0,1,5,0");
    }

    #[test]
    fn test_document_uses_bounds() {
        let w = SvgPathWriter::new(DVec2::ZERO);
        let doc = w.to_document(Some((DVec2::ZERO, DVec2::new(10.0, 20.0))), 2.0);
        assert!(doc.contains("viewBox=\"-2 -2 14 24\""));
        assert!(doc.contains("d=\"M 0,0\""));
    }
}
