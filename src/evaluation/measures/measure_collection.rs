use crate::clustering::{Clustering, DataPoint};
use crate::evaluation::Measurement;
use crate::evaluation::measures::{MeasureError, MeasureStats};

/// Group of related clustering-quality measures computed together.
///
/// Every successful evaluation is folded into [`stats`](Self::stats), so a
/// caller can read the last value as well as the mean, min and max seen over
/// the whole run.
pub trait MeasureCollection {
    /// Names of the produced measurements, in output order.
    fn names(&self) -> &'static [&'static str];

    /// Evaluates `clustering` against the reference `points`, optionally using
    /// a ground-truth clustering.
    fn evaluate_clustering(
        &mut self,
        clustering: &Clustering,
        ground_truth: Option<&Clustering>,
        points: &[DataPoint],
    ) -> Result<Vec<Measurement>, MeasureError>;

    fn stats(&self) -> &MeasureStats;
}
