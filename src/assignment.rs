use super::*;
use serde::Serialize;

/// A total mapping from point index to centroid index.
///
/// Partitions the point set into `k` non-overlapping, possibly-empty
/// clusters. Recomputed from scratch every iteration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Assignment {
    k: usize,
    labels: Vec<usize>,
}

impl Assignment {
    pub fn new(k: usize, labels: Vec<usize>) -> Self {
        debug_assert!(labels.iter().all(|&j| j < k));
        Self { k, labels }
    }

    /// Plain nearest-centroid assignment, lowest index winning ties.
    pub fn nearest(points: &Points, centroids: &[Centroid]) -> Self {
        let labels = points
            .iter()
            .map(|p| neighbor(p, centroids).index())
            .collect();
        Self::new(centroids.len(), labels)
    }

    pub fn k(&self) -> usize {
        self.k
    }
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Cluster index of point `i`.
    pub fn cluster(&self, i: usize) -> usize {
        self.labels[i]
    }
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }
    /// Point indices assigned to cluster `j`, in store order.
    pub fn members(&self, j: usize) -> impl Iterator<Item = usize> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == j)
            .map(|(i, _)| i)
    }
    /// Member count per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k];
        self.labels.iter().for_each(|&j| sizes[j] += 1);
        sizes
    }
    /// Total point weight per cluster.
    pub fn weights(&self, points: &Points) -> Vec<Weight> {
        let mut weights = vec![0.; self.k];
        self.labels
            .iter()
            .zip(points.iter())
            .for_each(|(&j, p)| weights[j] += p.weight());
        weights
    }
    /// Sum of squared distances from each point to its assigned centroid.
    /// Weighted by population when `weighted` is set.
    pub fn inertia(&self, points: &Points, centroids: &[Centroid], weighted: bool) -> Energy {
        self.labels
            .iter()
            .zip(points.iter())
            .map(|(&j, p)| match weighted {
                true => p.weight() * p.distance(&centroids[j]),
                false => p.distance(&centroids[j]),
            })
            .sum()
    }
}

/// Nearest centroid to a point by squared distance.
/// Strict comparison keeps the lowest centroid index on ties.
pub fn neighbor(p: &Point, centroids: &[Centroid]) -> DistanceSample {
    centroids
        .iter()
        .enumerate()
        .map(|(j, c)| DistanceSample::new(p.distance(c), j))
        .reduce(DistanceSample::closer)
        .expect("at least one centroid")
}
