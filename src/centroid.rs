use super::*;
use serde::Serialize;

/// The representative location of a cluster.
///
/// Identified by its index in the centroid sequence; index identity is
/// stable across iterations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Centroid {
    x: f64,
    y: f64,
}

impl Centroid {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    /// Squared displacement between two positions of the same centroid.
    pub fn drift(&self, other: &Self) -> Energy {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<&Point> for Centroid {
    fn from(p: &Point) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<(f64, f64)> for Centroid {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6} {:.6}", self.x, self.y)
    }
}
