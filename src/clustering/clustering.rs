use crate::clustering::SphereCluster;

/// Ordered set of clusters produced by a clusterer or given as ground truth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    clusters: Vec<SphereCluster>,
}

impl Clustering {
    pub fn new(clusters: Vec<SphereCluster>) -> Self {
        Self { clusters }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SphereCluster> {
        self.clusters.iter()
    }
}
