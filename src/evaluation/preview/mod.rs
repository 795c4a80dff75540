mod learning_curve;
mod vote_snapshot;

pub use learning_curve::{CurveFormat, LearningCurve, MISSING_VALUE};
pub use vote_snapshot::VoteSnapshot;
