//! Kurven-Engine: Längenmessung, Kürzung und Kanten-Verzerrung parametrischer Kurven.
//!
//! Grundlage aller Zeichen-Abstraktionen (Turtle, Lineal, Pfad-Tracer).
//! Reine Berechnungen ohne I/O; einzige veränderliche Ressource ist der
//! vom Aufrufer übergebene [`AreaAccumulator`].
//!
//! Aufbau:
//! - `curve`: Kurven-Evaluatoren (Linie, Bézier 2./3. Grades, Ellipsenbogen)
//! - `length`: Polylinien-Längenapproximation mit optionalem Limit
//! - `area`: Bounding-Box und Fernpunkt eines Strichs
//! - `edge`: periodische Kanten-Wellenformen
//! - `arc_params`: Normalisierung von Radius-/Winkel-Argumenten
//! - `liner`: Orchestrierung und Übergabe an den [`DrawHandler`]

pub mod angle;
pub mod arc_params;
pub mod area;
pub mod curve;
pub mod edge;
pub mod length;
pub mod liner;

pub use arc_params::{arrange_arc_params, ArcArg, ArcParams};
pub use area::AreaAccumulator;
pub use curve::{clamp_radius, CurveSpec, RADIUS_EPSILON};
pub use edge::{
    abs_sine_edge, make_edge, normal_edge, sawtooth_edge, sine_edge, square_edge, triangle_edge,
    EdgeConfig, EdgeFn, EdgeOptions, EdgeShape,
};
pub use length::{approximate, sample_count, LengthResult};
pub use liner::{arrange_sweep, ArcSegment, DrawHandler, Liner, DEFAULT_NORMAL_DIRECTION_OFFSET};
