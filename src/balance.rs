use super::*;
use std::cmp::Ordering;

/// Greedy capacity-balanced assignment of weighted points.
///
/// Each cluster should carry about `total_weight / k` population (its
/// desired capacity) while points still prefer their nearest centroid.
///
/// # Algorithm
///
/// 1. Rank points by benefit: distance to the farthest open centroid minus
///    distance to the nearest open centroid (plain Euclidean)
/// 2. Walk the ranking in descending benefit, giving each point to its
///    nearest open centroid
/// 3. A cluster whose load reaches capacity (`>=`) closes; the remaining
///    points are re-ranked against the centroids still open
///
/// A cluster only closes on the point that fills it, so its load exceeds
/// capacity by less than that one point's weight.
///
/// If every cluster has closed while points remain (zero-weight points, or
/// rounding in the capacity sum) those points go to their nearest centroid.
pub struct Balancer<'a> {
    points: &'a Points,
    centroids: &'a [Centroid],
}

/// A point's ranking against the currently open centroids.
///
/// Distances here are plain Euclidean, sorted ascending, tagged with
/// centroid indices.
#[derive(Debug, Clone)]
pub struct Preference {
    index: usize,
    benefit: Energy,
    distances: Vec<DistanceSample>,
}

impl Preference {
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn benefit(&self) -> Energy {
        self.benefit
    }
    /// Nearest open centroid, if any remain.
    pub fn nearest(&self) -> Option<usize> {
        self.distances.first().map(DistanceSample::index)
    }
    /// Descending benefit; ties keep store order.
    fn order(a: &Self, b: &Self) -> Ordering {
        b.benefit
            .total_cmp(&a.benefit)
            .then_with(|| a.index.cmp(&b.index))
    }
}

impl<'a> Balancer<'a> {
    /// Population each cluster should carry.
    pub fn capacity(&self) -> Weight {
        self.points.total_weight() / self.centroids.len() as Weight
    }

    /// Ranks a point against the open centroids.
    pub fn prefer(&self, i: usize, open: &[bool]) -> Preference {
        let ref p = self.points[i];
        let mut distances = self
            .centroids
            .iter()
            .enumerate()
            .filter(|(j, _)| open[*j])
            .map(|(j, c)| DistanceSample::new(p.distance(c).sqrt(), j))
            .collect::<Vec<DistanceSample>>();
        distances.sort_by(DistanceSample::order);
        let benefit = match (distances.first(), distances.last()) {
            (Some(near), Some(far)) => far.distance() - near.distance(),
            _ => 0.,
        };
        Preference {
            index: i,
            benefit,
            distances,
        }
    }

    /// Orders the given points by descending benefit over the open centroids.
    pub fn rank(&self, indices: impl Iterator<Item = usize>, open: &[bool]) -> Vec<Preference> {
        let mut ranking = indices
            .map(|i| self.prefer(i, open))
            .collect::<Vec<Preference>>();
        ranking.sort_by(Preference::order);
        ranking
    }

    /// Walks the ranking, closing clusters as they fill.
    pub fn assign(self) -> Assignment {
        let k = self.centroids.len();
        let capacity = self.capacity();
        let mut open = vec![true; k];
        let mut loads = vec![0.; k];
        let mut labels = vec![0; self.points.len()];
        let mut ranking = self.rank(0..self.points.len(), &open);
        let mut cursor = 0;
        while let Some(preference) = ranking.get(cursor) {
            cursor += 1;
            let ref point = self.points[preference.index()];
            let j = preference
                .nearest()
                .unwrap_or_else(|| neighbor(point, self.centroids).index());
            labels[preference.index()] = j;
            loads[j] += point.weight();
            if open[j] && loads[j] >= capacity {
                open[j] = false;
                log::debug!(
                    "cluster {:>3} full at {:.3} / {:.3}, {} points left",
                    j,
                    loads[j],
                    capacity,
                    ranking.len() - cursor
                );
                let remaining = ranking[cursor..]
                    .iter()
                    .map(Preference::index)
                    .collect::<Vec<usize>>();
                ranking = self.rank(remaining.into_iter(), &open);
                cursor = 0;
            }
        }
        Assignment::new(k, labels)
    }
}

impl<'a> From<(&'a Points, &'a [Centroid])> for Balancer<'a> {
    fn from((points, centroids): (&'a Points, &'a [Centroid])) -> Self {
        assert!(!centroids.is_empty(), "balancing needs at least one centroid");
        Self { points, centroids }
    }
}
