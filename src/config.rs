use super::*;
use rand::rngs::SmallRng;

/// Validated parameters of one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    k: usize,
    seeding: Seeding,
    balanced: bool,
    weighted: bool,
    vacancy: Vacancy,
    threshold: Energy,
    max_iterations: usize,
    seed: Option<u64>,
}

impl Config {
    /// Plain Lloyd's with uniform seeding and the default tuning constants.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            seeding: Seeding::default(),
            balanced: false,
            weighted: false,
            vacancy: Vacancy::default(),
            threshold: CONVERGENCE_THRESHOLD,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
    /// Capacity-balanced k-means++ with population-weighted means.
    pub fn balanced(k: usize) -> Self {
        Self::new(k)
            .with_seeding(Seeding::PlusPlus)
            .with_balanced(true)
            .with_weighted(true)
    }

    pub fn with_seeding(mut self, seeding: Seeding) -> Self {
        self.seeding = seeding;
        self
    }
    pub fn with_balanced(mut self, balanced: bool) -> Self {
        self.balanced = balanced;
        self
    }
    pub fn with_weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }
    pub fn with_vacancy(mut self, vacancy: Vacancy) -> Self {
        self.vacancy = vacancy;
        self
    }
    pub fn with_threshold(mut self, threshold: Energy) -> Self {
        self.threshold = threshold;
        self
    }
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }
    pub fn seeding(&self) -> Seeding {
        self.seeding
    }
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
    pub fn vacancy(&self) -> Vacancy {
        self.vacancy
    }
    pub fn threshold(&self) -> Energy {
        self.threshold
    }
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Rejects parameters no point set could satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be a positive integer",
            });
        }
        if !self.threshold.is_finite() || self.threshold < 0. {
            return Err(Error::InvalidParameter {
                name: "threshold",
                message: "must be a finite, non-negative squared distance",
            });
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iterations",
                message: "must allow at least one iteration",
            });
        }
        Ok(())
    }

    /// Random source for seeding.
    pub fn rng(&self) -> SmallRng {
        rng(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = Config::new(3);
        assert_eq!(config.k(), 3);
        assert_eq!(config.seeding(), Seeding::Uniform);
        assert_eq!(config.threshold(), CONVERGENCE_THRESHOLD);
        assert_eq!(config.max_iterations(), MAX_ITERATIONS);
        assert!(!config.is_balanced());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn balanced_preset() {
        let config = Config::balanced(2);
        assert_eq!(config.seeding(), Seeding::PlusPlus);
        assert!(config.is_balanced());
        assert!(config.is_weighted());
    }

    #[test]
    fn invalid_parameters() {
        assert!(Config::new(0).validate().is_err());
        assert!(Config::new(2).with_max_iterations(0).validate().is_err());
        assert!(Config::new(2).with_threshold(-1.).validate().is_err());
        assert!(Config::new(2).with_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = Config::new(2).with_seed(42);
        let a = config.rng().random::<u64>();
        let b = config.rng().random::<u64>();
        assert_eq!(a, b);
    }
}
