mod curve;
mod error;
mod preset;

pub use curve::{CurveParameters, CurvePoint, CurveSummary, IncrementPoint};
pub use error::CurveError;
pub use preset::{find_preset, Preset, PRESETS};
