mod curve_parameters;
mod error;

pub use curve_parameters::{CurveParameters, DEFAULT_ORDERING_MEASUREMENT, load_parameters};
pub use error::BuildError;
