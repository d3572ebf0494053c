//! Geteilte Konfiguration für Binary, Turtle und Tests.

pub mod options;

pub use options::LinerOptions;
pub use options::{SAMPLE_DENSITY, TURTLE_STEP};
