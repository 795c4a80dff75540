mod clustering;
mod data_point;
mod sphere_cluster;

pub use clustering::Clustering;
pub use data_point::DataPoint;
pub use sphere_cluster::SphereCluster;

/// Squared Euclidean distance over the shorter of the two slices.
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
