use crate::classifiers::split_criteria::SplitCriterion;

/// Branches with fewer observations than this make a split worthless.
pub const MIN_BRANCH_COUNT: f64 = 5.0;

/// Standard deviation reduction for regression trees.
///
/// Distributions are `[count, sum, sum_of_squares]` triples.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdrSplitCriterion;

impl SdrSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    /// `sqrt((Q − S²/N) / N)` with the count truncated to an integer.
    ///
    /// The corrected sum of squares is divided by `N` twice over, so this is a
    /// relative weighting between splits rather than a calibrated deviation.
    /// Shorter inputs yield NaN.
    pub fn compute_sd(dist: &[f64]) -> f64 {
        let &[n, sum, sum_sq, ..] = dist else {
            return f64::NAN;
        };
        let n = n.trunc();
        ((sum_sq - (sum * sum) / n) / n).sqrt()
    }
}

impl SplitCriterion for SdrSplitCriterion {
    fn get_range_of_merit(&self, _pre_split_distribution: &[f64]) -> f64 {
        1.0
    }

    fn get_merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let all_branches_filled = post_split_dists
            .iter()
            .all(|d| d.first().is_some_and(|&n| n >= MIN_BRANCH_COUNT));
        if !all_branches_filled {
            return 0.0;
        }

        let n = pre_split_distribution.first().copied().unwrap_or(f64::NAN);
        post_split_dists
            .iter()
            .fold(Self::compute_sd(pre_split_distribution), |sdr, d| {
                sdr - (d[0] / n) * Self::compute_sd(d)
            })
    }
}
