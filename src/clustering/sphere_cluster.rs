use crate::clustering::{DataPoint, squared_distance};

/// Cluster summarized by a center, a radius and a total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereCluster {
    center: Vec<f64>,
    radius: f64,
    weight: f64,
}

impl SphereCluster {
    pub fn new(center: Vec<f64>, radius: f64, weight: f64) -> Self {
        Self {
            center,
            radius,
            weight,
        }
    }

    /// Sphere around the weighted centroid of `points`, looking at the first
    /// `dimension` coordinates of each point.
    ///
    /// The radius reaches the farthest point; the weight is the points' total
    /// weight. Returns `None` for an empty point set.
    pub fn from_points(points: &[DataPoint], dimension: usize) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut center = vec![0.0; dimension];
        let mut weight = 0.0;
        for p in points {
            for (c, v) in center.iter_mut().zip(&p.values) {
                *c += p.weight * v;
            }
            weight += p.weight;
        }
        for c in center.iter_mut() {
            *c /= weight;
        }

        let radius = points
            .iter()
            .map(|p| squared_distance(&center, &p.values).sqrt())
            .fold(0.0, f64::max);

        Some(Self::new(center, radius, weight))
    }

    #[inline]
    pub fn center(&self) -> &[f64] {
        &self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.center.len()
    }

    /// The center as a point carrying this cluster's weight.
    pub fn to_weighted_center(&self) -> DataPoint {
        DataPoint::new(self.center.clone(), self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_points_have_no_sphere() {
        assert!(SphereCluster::from_points(&[], 2).is_none());
    }

    #[test]
    fn center_is_weighted_centroid() {
        let points = vec![
            DataPoint::new(vec![0.0, 0.0], 1.0),
            DataPoint::new(vec![2.0, 4.0], 3.0),
        ];
        let sc = SphereCluster::from_points(&points, 2).unwrap();
        assert_eq!(sc.center(), &[1.5, 3.0]);
        assert_eq!(sc.weight(), 4.0);
        assert_eq!(sc.dimension(), 2);
        let far = (1.5f64 * 1.5 + 3.0 * 3.0).sqrt();
        assert!((sc.radius() - far).abs() < 1e-12);
    }

    #[test]
    fn ignores_coordinates_past_dimension() {
        let points = vec![
            DataPoint::unit(vec![1.0, 10.0]),
            DataPoint::unit(vec![3.0, 20.0]),
        ];
        let sc = SphereCluster::from_points(&points, 1).unwrap();
        assert_eq!(sc.center(), &[2.0]);
        assert_eq!(sc.radius(), 1.0);
    }
}
