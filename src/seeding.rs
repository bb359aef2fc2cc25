use super::*;
use rand::Rng;
use std::collections::HashSet;

/// Initial centroid selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seeding {
    /// Distinct points drawn uniformly at random.
    #[default]
    Uniform,
    /// k-means++: points drawn proportional to squared distance from the
    /// nearest already-chosen centroid.
    PlusPlus,
}

impl Seeding {
    /// Selects `k` initial centroids.
    ///
    /// Fails rather than looping forever when the point set holds fewer
    /// than `k` distinct locations.
    pub fn seed<R: Rng>(&self, points: &Points, k: usize, rng: &mut R) -> Result<Vec<Centroid>> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be a positive integer",
            });
        }
        let distinct = points.distinct();
        if k > distinct {
            return Err(Error::InvalidClusterCount {
                requested: k,
                distinct,
            });
        }
        log::info!("{:<32}{:<32}", "seeding centroids", format!("{:?} k={}", self, k));
        let centroids = match self {
            Self::Uniform => uniform(points, k, rng),
            Self::PlusPlus => plusplus(points, k, rng),
        };
        centroids
            .iter()
            .enumerate()
            .for_each(|(i, c)| log::debug!("seed {:>3} {}", i, c));
        Ok(centroids)
    }
}

/// Rejection-samples points until `k` bit-for-bit distinct locations are
/// collected. Callers guarantee at least `k` distinct locations exist.
pub fn uniform<R: Rng>(points: &Points, k: usize, rng: &mut R) -> Vec<Centroid> {
    let mut chosen = HashSet::with_capacity(k);
    let mut centroids = Vec::with_capacity(k);
    while centroids.len() < k {
        let ref candidate = points[rng.random_range(0..points.len())];
        if chosen.insert(candidate.location()) {
            centroids.push(Centroid::from(candidate));
        }
    }
    centroids
}

/// k-means++ seeding.
///
/// Sampling is over point indices, so two points sharing a location may
/// both be chosen.
pub fn plusplus<R: Rng>(points: &Points, k: usize, rng: &mut R) -> Vec<Centroid> {
    let first = rng.random_range(0..points.len());
    let mut centroids = Vec::with_capacity(k);
    centroids.push(Centroid::from(&points[first]));
    let mut potentials = potentials(points, &centroids);
    while centroids.len() < k {
        let i = choose(&potentials, rng);
        let ref x = Centroid::from(&points[i]);
        centroids.push(*x);
        potentials.iter_mut().for_each(|s| {
            let d = points[s.index()].distance(x);
            *s = s.closer(DistanceSample::new(d, s.index()));
        });
    }
    centroids
}

/// D(x) for every point: squared distance to its nearest chosen centroid,
/// tagged with the point's index.
pub fn potentials(points: &Points, centroids: &[Centroid]) -> Vec<DistanceSample> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let d = centroids
                .iter()
                .map(|c| p.distance(c))
                .fold(Energy::INFINITY, Energy::min);
            DistanceSample::new(d, i)
        })
        .collect()
}

/// Weighted choice over cumulative-sum intervals.
///
/// One uniform draw in `[0, total)` selects the first interval whose
/// cumulative bound exceeds it. With zero total weight every point is
/// already a centroid location, so the draw falls back to uniform.
pub fn choose<R: Rng>(samples: &[DistanceSample], rng: &mut R) -> usize {
    debug_assert!(!samples.is_empty());
    let total = samples.iter().map(DistanceSample::distance).sum::<Energy>();
    if !(total > 0.) || !total.is_finite() {
        return samples[rng.random_range(0..samples.len())].index();
    }
    let draw = rng.random::<Energy>() * total;
    let mut bound = 0.;
    samples
        .iter()
        .find(|s| {
            bound += s.distance();
            draw < bound
        })
        .or_else(|| samples.iter().rev().find(|s| s.distance() > 0.))
        .map(DistanceSample::index)
        .expect("positive total implies a positive sample")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn square() -> Points {
        Points::from(vec![
            Point::new(0., 0.),
            Point::new(0., 1.),
            Point::new(10., 0.),
            Point::new(10., 1.),
        ])
    }

    #[test]
    fn uniform_seeds_are_distinct() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let points = Points::from(vec![
            Point::new(0., 0.),
            Point::new(0., 0.),
            Point::new(0., 0.),
            Point::new(1., 1.),
        ]);
        let seeds = Seeding::Uniform.seed(&points, 2, rng).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_ne!(seeds[0], seeds[1]);
    }

    #[test]
    fn too_few_distinct_locations() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let points = Points::from(vec![Point::new(1., 1.); 5]);
        let err = Seeding::Uniform.seed(&points, 2, rng);
        assert!(matches!(
            err,
            Err(Error::InvalidClusterCount {
                requested: 2,
                distinct: 1
            })
        ));
    }

    #[test]
    fn zero_k_rejected() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let err = Seeding::PlusPlus.seed(&square(), 0, rng);
        assert!(matches!(err, Err(Error::InvalidParameter { name: "k", .. })));
    }

    #[test]
    fn empty_points_rejected() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let err = Seeding::Uniform.seed(&Points::default(), 1, rng);
        assert!(matches!(err, Err(Error::EmptyInput)));
    }

    #[test]
    fn plusplus_spreads_out() {
        // once one side is chosen, every remaining unit of weight lies on the other side
        for seed in 0..32 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let points = Points::from(vec![
                Point::new(0., 0.),
                Point::new(0., 0.),
                Point::new(100., 0.),
            ]);
            let seeds = Seeding::PlusPlus.seed(&points, 2, rng).unwrap();
            assert_eq!(seeds[0].drift(&seeds[1]), 10000.);
        }
    }

    #[test]
    fn plusplus_reproducible_with_seed() {
        let a = Seeding::PlusPlus.seed(&square(), 3, &mut SmallRng::seed_from_u64(99));
        let b = Seeding::PlusPlus.seed(&square(), 3, &mut SmallRng::seed_from_u64(99));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn potentials_track_nearest() {
        let centroids = vec![Centroid::new(0., 0.), Centroid::new(10., 0.)];
        let d = potentials(&square(), &centroids);
        assert_eq!(
            d.iter().map(DistanceSample::distance).collect::<Vec<_>>(),
            vec![0., 1., 0., 1.]
        );
        assert_eq!(
            d.iter().map(DistanceSample::index).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn choose_never_picks_zero_weight() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let samples = vec![
            DistanceSample::new(0., 0),
            DistanceSample::new(4., 1),
            DistanceSample::new(0., 2),
            DistanceSample::new(1., 3),
        ];
        for _ in 0..256 {
            let i = choose(&samples, rng);
            assert!(i == 1 || i == 3);
        }
    }

    #[test]
    fn choose_zero_total_falls_back_to_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let samples = vec![DistanceSample::new(0., 0), DistanceSample::new(0., 1)];
        assert!(choose(&samples, rng) < 2);
    }
}
