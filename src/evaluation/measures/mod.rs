mod error;
mod measure_collection;
mod measure_stats;
mod separation;

pub use error::MeasureError;
pub use measure_collection::MeasureCollection;
pub use measure_stats::{MeasureStats, ValueStats};
pub use separation::Separation;
