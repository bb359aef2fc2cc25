use super::*;
use std::cmp::Ordering;

/// A 2-D point carrying a population weight.
///
/// Weight is 1 for the unweighted variants and the point's population
/// in the capacity-balanced variant. Points are immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
    weight: Weight,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, weight: 1. }
    }
    pub fn weighted(weight: Weight, x: f64, y: f64) -> Self {
        Self { x, y, weight }
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
    /// Squared Euclidean distance to a centroid.
    pub fn distance(&self, c: &Centroid) -> Energy {
        let dx = self.x - c.x();
        let dy = self.y - c.y();
        dx * dx + dy * dy
    }
    /// Bit-for-bit coordinate identity, used to reject duplicate seeds.
    pub fn location(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
    /// Ascending by x, ties broken by y.
    pub fn order(a: &Self, b: &Self) -> Ordering {
        a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(Weight, f64, f64)> for Point {
    fn from((weight, x, y): (Weight, f64, f64)) -> Self {
        Self::weighted(weight, x, y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} {:.6}", self.x, self.y)
    }
}
