//! Aufzeichnung der Handler-Aufrufe als Pfad-Kommandos.

use super::Surface;
use edge_liner_engine::{ArcSegment, CurveSpec, DrawHandler};
use glam::DVec2;

/// Ein aufgezeichneter Handler-Aufruf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo {
        to: DVec2,
        end_dir: f64,
    },
    QuadTo {
        handle: DVec2,
        to: DVec2,
        end_dir: f64,
    },
    CubicTo {
        handle1: DVec2,
        handle2: DVec2,
        to: DVec2,
        end_dir: f64,
    },
    Arc {
        arc: ArcSegment,
        end: DVec2,
        end_dir: f64,
    },
}

impl PathCommand {
    /// Punkt, an dem der Pfad nach diesem Kommando steht.
    pub fn end_point(&self) -> DVec2 {
        match *self {
            PathCommand::MoveTo(to)
            | PathCommand::LineTo { to, .. }
            | PathCommand::QuadTo { to, .. }
            | PathCommand::CubicTo { to, .. } => to,
            PathCommand::Arc { end, .. } => end,
        }
    }

    /// Richtung (Grad) am Ende; `None` für reine Bewegungen.
    pub fn end_dir(&self) -> Option<f64> {
        match *self {
            PathCommand::MoveTo(_) => None,
            PathCommand::LineTo { end_dir, .. }
            | PathCommand::QuadTo { end_dir, .. }
            | PathCommand::CubicTo { end_dir, .. }
            | PathCommand::Arc { end_dir, .. } => Some(end_dir),
        }
    }
}

/// Zeichnet alle Aufrufe eines [`Liner`](edge_liner_engine::Liner) im Speicher auf.
#[derive(Debug, Clone, Default)]
pub struct PolylineRecorder {
    start: DVec2,
    commands: Vec<PathCommand>,
}

impl PolylineRecorder {
    pub fn new(start: DVec2) -> Self {
        Self {
            start,
            commands: Vec::new(),
        }
    }

    pub fn start(&self) -> DVec2 {
        self.start
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Aktuelle Stiftposition (Startpunkt, solange nichts aufgezeichnet wurde).
    pub fn current(&self) -> DVec2 {
        self.commands
            .last()
            .map_or(self.start, PathCommand::end_point)
    }

    /// Zerlegt den Pfad in Teilpfade (getrennt durch `MoveTo`) aus Polylinien.
    ///
    /// Kurven und Bögen werden mit `segments_per_curve` gleichmäßigen
    /// Parameterschritten abgetastet. Ein Bogen beginnt wie bei Canvas2D
    /// mit einer Verbindungslinie zu seinem Startpunkt.
    pub fn flatten(&self, segments_per_curve: usize) -> Vec<Vec<DVec2>> {
        let n = segments_per_curve.max(1);
        let mut paths = Vec::new();
        let mut current = vec![self.start];

        for cmd in &self.commands {
            let from = current.last().copied().unwrap_or(self.start);
            let curve = match *cmd {
                PathCommand::MoveTo(to) => {
                    if current.len() > 1 {
                        paths.push(std::mem::take(&mut current));
                    }
                    current = vec![to];
                    continue;
                }
                PathCommand::LineTo { to, .. } => {
                    current.push(to);
                    continue;
                }
                PathCommand::QuadTo { handle, to, .. } => CurveSpec::QuadraticBezier {
                    from,
                    handle,
                    to,
                },
                PathCommand::CubicTo {
                    handle1,
                    handle2,
                    to,
                    ..
                } => CurveSpec::CubicBezier {
                    from,
                    handle1,
                    handle2,
                    to,
                },
                PathCommand::Arc { arc, .. } => CurveSpec::EllipticalArc {
                    center: arc.center,
                    rotation: arc.rotation,
                    rx: arc.radii.x,
                    ry: arc.radii.y,
                    start_angle: arc.start_angle,
                    end_angle: arc.end_angle,
                    anticlockwise: arc.anticlockwise,
                },
            };
            let first = if matches!(cmd, PathCommand::Arc { .. }) { 0 } else { 1 };
            current.extend((first..=n).map(|i| curve.point_at(i as f64 / n as f64)));
        }
        if current.len() > 1 {
            paths.push(current);
        }
        paths
    }

    /// Gesamtlänge aller gezeichneten Teilpfade (siehe [`Self::flatten`]).
    pub fn flattened_length(&self, segments_per_curve: usize) -> f64 {
        self.flatten(segments_per_curve)
            .iter()
            .flat_map(|path| path.windows(2))
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}

impl DrawHandler for PolylineRecorder {
    fn line_or_move_to(&mut self, to: DVec2, end_dir: f64) {
        self.commands.push(PathCommand::LineTo { to, end_dir });
    }

    fn quad_curve_or_move_to(&mut self, handle: DVec2, to: DVec2, end_dir: f64) {
        self.commands.push(PathCommand::QuadTo {
            handle,
            to,
            end_dir,
        });
    }

    fn bezier_curve_or_move_to(&mut self, handle1: DVec2, handle2: DVec2, to: DVec2, end_dir: f64) {
        self.commands.push(PathCommand::CubicTo {
            handle1,
            handle2,
            to,
            end_dir,
        });
    }

    fn arc_or_move_to(&mut self, arc: &ArcSegment, end_dir: f64, end: DVec2) {
        self.commands.push(PathCommand::Arc {
            arc: *arc,
            end,
            end_dir,
        });
    }
}

impl Surface for PolylineRecorder {
    fn move_to(&mut self, to: DVec2) {
        self.commands.push(PathCommand::MoveTo(to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flatten_splits_on_move() {
        let mut rec = PolylineRecorder::new(DVec2::ZERO);
        rec.line_or_move_to(DVec2::new(10.0, 0.0), 0.0);
        rec.move_to(DVec2::new(0.0, 10.0));
        rec.line_or_move_to(DVec2::new(0.0, 20.0), 90.0);

        let paths = rec.flatten(4);
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]);
        assert_eq!(paths[1], vec![DVec2::new(0.0, 10.0), DVec2::new(0.0, 20.0)]);
        assert_relative_eq!(rec.flattened_length(4), 20.0);
    }

    #[test]
    fn test_flatten_quad_hits_endpoint() {
        let mut rec = PolylineRecorder::new(DVec2::ZERO);
        rec.quad_curve_or_move_to(DVec2::new(5.0, 5.0), DVec2::new(10.0, 0.0), -45.0);
        let paths = rec.flatten(8);
        assert_eq!(paths[0].len(), 9);
        let last = paths[0][8];
        assert_relative_eq!(last.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_current_follows_last_command() {
        let mut rec = PolylineRecorder::new(DVec2::new(1.0, 2.0));
        assert_eq!(rec.current(), DVec2::new(1.0, 2.0));
        let arc = ArcSegment {
            center: DVec2::ZERO,
            rotation: 0.0,
            radii: DVec2::splat(5.0),
            start_angle: 0.0,
            end_angle: std::f64::consts::FRAC_PI_2,
            anticlockwise: false,
        };
        rec.arc_or_move_to(&arc, 180.0, DVec2::new(0.0, 5.0));
        assert_eq!(rec.current(), DVec2::new(0.0, 5.0));
        assert_eq!(rec.commands()[0].end_dir(), Some(180.0));
    }
}
