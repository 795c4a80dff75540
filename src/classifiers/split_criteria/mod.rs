mod sdr_split_criterion;
mod split_criterion;

pub use sdr_split_criterion::{MIN_BRANCH_COUNT, SdrSplitCriterion};
pub use split_criterion::SplitCriterion;
