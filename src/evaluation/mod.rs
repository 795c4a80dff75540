mod error;
mod estimators;
mod measurement;
pub mod measures;
pub mod preview;
mod registry;

pub use error::CurveError;
pub use estimators::{BasicEstimator, Estimator};
pub use measurement::{Measurement, Vote};
pub use preview::{CurveFormat, LearningCurve, VoteSnapshot};
pub use registry::NameRegistry;
