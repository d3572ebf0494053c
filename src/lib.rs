//! Edge Liner Library.
//! Zeichen-Adapter, Turtle-Sitzung und Konfiguration rund um die Kurven-Engine.

pub mod adapters;
pub mod pen;
pub mod shared;

pub use adapters::{PathCommand, PenTracker, PolylineRecorder, Surface, SvgPathWriter};
pub use edge_liner_engine::{
    abs_sine_edge, arrange_arc_params, normal_edge, sawtooth_edge, sine_edge, square_edge,
    triangle_edge, ArcArg, ArcParams, ArcSegment, AreaAccumulator, CurveSpec, DrawHandler,
    EdgeConfig, EdgeFn, EdgeOptions, EdgeShape, LengthResult, Liner,
};
pub use pen::Pen;
pub use shared::LinerOptions;
