use super::*;

/// Policy for a centroid whose cluster received no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vacancy {
    /// Keep the centroid where it was.
    #[default]
    Freeze,
    /// Move the centroid onto the point farthest from its nearest current
    /// centroid. Each point seeds at most one vacancy per pass.
    Reseed,
}

/// Running means for one cluster.
///
/// Each member moves the means by its share of the total rather than
/// accumulating raw sums, so coordinates near `f64::MAX` stay finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mass {
    x: f64,
    y: f64,
    wx: f64,
    wy: f64,
    weight: Weight,
    count: usize,
}

impl Mass {
    /// Folds one member into the means.
    pub fn absorb(mut self, p: &Point) -> Self {
        self.count += 1;
        let share = 1. / self.count as f64;
        self.x += p.x() * share - self.x * share;
        self.y += p.y() * share - self.y * share;
        if p.weight() > 0. {
            self.weight += p.weight();
            let share = p.weight() / self.weight;
            self.wx += p.x() * share - self.wx * share;
            self.wy += p.y() * share - self.wy * share;
        }
        self
    }
    /// Arithmetic mean, or population-weighted mean when `weighted` is set
    /// and the cluster carries positive weight. `None` for an empty cluster.
    pub fn mean(&self, weighted: bool) -> Option<Centroid> {
        match self.count {
            0 => None,
            _ if weighted && self.weight > 0. => Some(Centroid::new(self.wx, self.wy)),
            _ => Some(Centroid::new(self.x, self.y)),
        }
    }
}

/// Recomputes every centroid as the mean of its assigned points.
///
/// `previous` holds the centroids the assignment was made against; empty
/// clusters are resolved from it according to `vacancy`.
pub fn update(
    points: &Points,
    assignment: &Assignment,
    previous: &[Centroid],
    weighted: bool,
    vacancy: Vacancy,
) -> Vec<Centroid> {
    assert_eq!(assignment.k(), previous.len(), "one centroid per cluster");
    let masses = (0..assignment.k())
        .map(|j| {
            assignment
                .members(j)
                .map(|i| &points[i])
                .fold(Mass::default(), Mass::absorb)
        })
        .collect::<Vec<Mass>>();
    let mut farthest = match vacancy {
        Vacancy::Freeze => Vec::new(),
        Vacancy::Reseed => outliers(points, previous),
    }
    .into_iter();
    masses
        .iter()
        .zip(previous.iter())
        .enumerate()
        .map(|(j, (mass, old))| match mass.mean(weighted) {
            Some(mean) => mean,
            None => match farthest.next() {
                Some(i) => {
                    log::debug!("cluster {:>3} empty, reseeding at {}", j, points[i]);
                    Centroid::from(&points[i])
                }
                None => {
                    log::debug!("cluster {:>3} empty, frozen at {}", j, old);
                    *old
                }
            },
        })
        .collect()
}

/// Point indices by descending squared distance to their nearest
/// centroid, lowest index first on ties.
fn outliers(points: &Points, centroids: &[Centroid]) -> Vec<usize> {
    let mut samples = potentials(points, centroids);
    samples.sort_by(|a, b| DistanceSample::order(b, a).then_with(|| a.index().cmp(&b.index())));
    samples.into_iter().map(|s| s.index()).collect()
}
