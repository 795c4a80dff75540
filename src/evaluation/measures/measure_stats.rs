use crate::evaluation::{BasicEstimator, Estimator, Measurement, NameRegistry};

/// Running summary of one named measure across evaluations.
#[derive(Debug, Clone, Copy)]
pub struct ValueStats {
    last: f64,
    min: f64,
    max: f64,
    mean: BasicEstimator,
}

impl Default for ValueStats {
    fn default() -> Self {
        Self {
            last: f64::NAN,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            mean: BasicEstimator::default(),
        }
    }
}

impl ValueStats {
    fn add(&mut self, v: f64) {
        self.last = v;
        if v.is_nan() {
            return;
        }
        self.min = self.min.min(v);
        self.max = self.max.max(v);
        self.mean.add(v);
    }

    /// Most recent value, NaN included.
    pub fn last(&self) -> f64 {
        self.last
    }

    pub fn mean(&self) -> f64 {
        self.mean.estimation()
    }

    pub fn min(&self) -> f64 {
        if self.count() == 0 { f64::NAN } else { self.min }
    }

    pub fn max(&self) -> f64 {
        if self.count() == 0 { f64::NAN } else { self.max }
    }

    /// Number of non-NaN values seen.
    pub fn count(&self) -> u64 {
        self.mean.count()
    }
}

/// Per-name [`ValueStats`], keyed through a [`NameRegistry`].
#[derive(Debug, Clone, Default)]
pub struct MeasureStats {
    names: NameRegistry,
    values: Vec<ValueStats>,
    evaluations: u64,
}

impl MeasureStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one evaluation's output into the summaries.
    pub fn record(&mut self, measurements: &[Measurement]) {
        for m in measurements {
            let index = self.names.resolve_or_create(&m.name);
            if index == self.values.len() {
                self.values.push(ValueStats::default());
            }
            self.values[index].add(m.value);
        }
        self.evaluations += 1;
    }

    pub fn get(&self, name: &str) -> Option<&ValueStats> {
        self.names.index_of(name).and_then(|i| self.values.get(i))
    }

    pub fn names(&self) -> &[String] {
        self.names.names()
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::measurements;

    #[test]
    fn unknown_name_has_no_stats() {
        let s = MeasureStats::new();
        assert!(s.get("BSS").is_none());
        assert_eq!(s.evaluations(), 0);
    }

    #[test]
    fn tracks_last_mean_min_max() {
        let mut s = MeasureStats::new();
        s.record(&measurements(&[("a", 2.0), ("b", 1.0)]));
        s.record(&measurements(&[("a", 6.0)]));
        s.record(&measurements(&[("a", f64::NAN), ("b", 3.0)]));

        let a = s.get("a").unwrap();
        assert!(a.last().is_nan());
        assert_eq!(a.mean(), 4.0);
        assert_eq!(a.min(), 2.0);
        assert_eq!(a.max(), 6.0);
        assert_eq!(a.count(), 2);

        let b = s.get("b").unwrap();
        assert_eq!(b.last(), 3.0);
        assert_eq!(b.mean(), 2.0);
        assert_eq!(s.names(), &["a", "b"]);
        assert_eq!(s.evaluations(), 3);
    }

    #[test]
    fn only_nan_leaves_min_max_undefined() {
        let mut s = MeasureStats::new();
        s.record(&measurements(&[("a", f64::NAN)]));
        let a = s.get("a").unwrap();
        assert!(a.min().is_nan());
        assert!(a.max().is_nan());
        assert!(a.mean().is_nan());
    }
}
