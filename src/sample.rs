use super::*;
use std::cmp::Ordering;

/// A squared distance tagged with the index of what it was measured to.
///
/// The reference is a centroid index for nearest-centroid lookup and a
/// point index for k-means++ sampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    distance: Energy,
    index: usize,
}

impl DistanceSample {
    pub fn new(distance: Energy, index: usize) -> Self {
        Self { distance, index }
    }
    pub fn distance(&self) -> Energy {
        self.distance
    }
    pub fn index(&self) -> usize {
        self.index
    }
    /// Keeps the running minimum, replacing it only on a strictly smaller
    /// distance so the first-encountered minimum wins ties.
    pub fn closer(self, other: Self) -> Self {
        if other.distance < self.distance {
            other
        } else {
            self
        }
    }
    pub fn order(a: &Self, b: &Self) -> Ordering {
        a.distance.total_cmp(&b.distance)
    }
}

impl From<(Energy, usize)> for DistanceSample {
    fn from((distance, index): (Energy, usize)) -> Self {
        Self::new(distance, index)
    }
}
