use crate::clustering::DataPoint;
use crate::evaluation::{Measurement, Vote};

pub fn measurements(pairs: &[(&str, f64)]) -> Vec<Measurement> {
    pairs
        .iter()
        .map(|&(name, value)| Measurement::new(name, value))
        .collect()
}

pub fn votes(pairs: &[(&str, &str)]) -> Vec<Vote> {
    pairs
        .iter()
        .map(|&(name, value)| Vote::new(name, value))
        .collect()
}

/// Four unit-weight points in two blobs around (0, 0) and (4, 0); centroid (2, 0).
pub fn two_blobs() -> Vec<DataPoint> {
    vec![
        DataPoint::unit(vec![0.0, 1.0]),
        DataPoint::unit(vec![0.0, -1.0]),
        DataPoint::unit(vec![4.0, 1.0]),
        DataPoint::unit(vec![4.0, -1.0]),
    ]
}
