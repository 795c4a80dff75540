/// Online scalar estimator fed one observation at a time.
pub trait Estimator {
    /// Incorporates a new observation. Implementations may skip NaN.
    fn add(&mut self, v: f64);

    /// Returns the current estimate, NaN before any accepted observation.
    fn estimation(&self) -> f64;

    /// Number of observations that contributed to the estimate.
    fn count(&self) -> u64;
}
