use crate::clustering::{Clustering, DataPoint, SphereCluster, squared_distance};
use crate::evaluation::Measurement;
use crate::evaluation::measures::{MeasureCollection, MeasureError, MeasureStats};
use tracing::debug;

const NAMES: [&str; 3] = ["BSS", "BSS-GT", "BSS-Ratio"];

/// Between-cluster sum of squares.
///
/// - `BSS`: predicted clustering against the weighted centroid of the points;
/// - `BSS-GT`: ground truth against the weighted centroid of its own centers
///   (`1.0` when no ground truth is given);
/// - `BSS-Ratio`: `BSS / BSS-GT`.
#[derive(Debug, Clone, Default)]
pub struct Separation {
    stats: MeasureStats,
}

impl Separation {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Σ weight(c) · ‖center(c) − mean‖²` over all clusters.
    pub fn bss(clustering: &Clustering, mean: &[f64]) -> f64 {
        clustering
            .iter()
            .map(|c| c.weight() * squared_distance(c.center(), mean))
            .sum()
    }

    fn check_centers(clustering: &Clustering, dimension: usize) -> Result<(), MeasureError> {
        match clustering.iter().find(|c| c.dimension() != dimension) {
            Some(c) => Err(MeasureError::DimensionMismatch {
                expected: dimension,
                found: c.dimension(),
            }),
            None => Ok(()),
        }
    }

    fn ground_truth_bss(ground_truth: &Clustering, dimension: usize) -> Result<f64, MeasureError> {
        Self::check_centers(ground_truth, dimension)?;
        let centers: Vec<DataPoint> = ground_truth
            .iter()
            .map(SphereCluster::to_weighted_center)
            .collect();
        Ok(match SphereCluster::from_points(&centers, dimension) {
            Some(gt) => Self::bss(ground_truth, gt.center()),
            None => 0.0,
        })
    }
}

impl MeasureCollection for Separation {
    fn names(&self) -> &'static [&'static str] {
        &NAMES
    }

    fn evaluate_clustering(
        &mut self,
        clustering: &Clustering,
        ground_truth: Option<&Clustering>,
        points: &[DataPoint],
    ) -> Result<Vec<Measurement>, MeasureError> {
        let dimension = points
            .first()
            .map(DataPoint::dimension)
            .ok_or(MeasureError::EmptyPoints)?;
        if let Some(p) = points.iter().find(|p| p.dimension() != dimension) {
            return Err(MeasureError::DimensionMismatch {
                expected: dimension,
                found: p.dimension(),
            });
        }
        Self::check_centers(clustering, dimension)?;

        let global = SphereCluster::from_points(points, dimension).ok_or(MeasureError::EmptyPoints)?;
        let bss = Self::bss(clustering, global.center());
        let bss_gt = match ground_truth {
            Some(gt) => Self::ground_truth_bss(gt, dimension)?,
            None => 1.0,
        };
        let ratio = bss / bss_gt;
        debug!(bss, bss_gt, ratio, clusters = clustering.len(), "separation evaluated");

        let out = vec![
            Measurement::new(NAMES[0], bss),
            Measurement::new(NAMES[1], bss_gt),
            Measurement::new(NAMES[2], ratio),
        ];
        self.stats.record(&out);
        Ok(out)
    }

    fn stats(&self) -> &MeasureStats {
        &self.stats
    }
}
