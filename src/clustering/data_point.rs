/// Weighted point in attribute space (class attribute excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub values: Vec<f64>,
    pub weight: f64,
}

impl DataPoint {
    pub fn new(values: Vec<f64>, weight: f64) -> Self {
        Self { values, weight }
    }

    pub fn unit(values: Vec<f64>) -> Self {
        Self::new(values, 1.0)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.values.len()
    }
}
