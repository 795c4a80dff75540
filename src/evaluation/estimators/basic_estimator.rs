use crate::evaluation::Estimator;

/// Streaming arithmetic mean. NaN observations are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    count: u64,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.count += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.count > 0 {
            self.sum / self.count as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_estimate_is_nan() {
        let e = BasicEstimator::default();
        assert!(e.estimation().is_nan());
        assert_eq!(e.count(), 0);
    }

    #[test]
    fn mean_skips_nan() {
        let mut e = BasicEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        e.add(3.0);
        assert_eq!(e.count(), 2);
        assert_eq!(e.estimation(), 2.0);
    }
}
