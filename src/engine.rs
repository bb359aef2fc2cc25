use super::*;
use rand::rngs::SmallRng;
use serde::Serialize;

/// How the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// No centroid moved more than the threshold on the last pass.
    Converged,
    /// The iteration cap was reached first.
    Exhausted,
}

/// Diagnostics for one assign/update pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Record {
    /// 1-based pass number.
    pub iteration: usize,
    /// Largest squared centroid displacement during the pass.
    pub drift: Energy,
    /// Objective of the pass's assignment against its updated centroids.
    pub inertia: Energy,
}

/// Final centroids and assignment of a clustering run.
///
/// On `Exhausted` these are the latest centroids and the assignment they
/// were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clustering {
    centroids: Vec<Centroid>,
    assignment: Assignment,
    outcome: Outcome,
    history: Vec<Record>,
}

impl Clustering {
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
    /// Passes run, including the final one that saw no movement.
    pub fn iterations(&self) -> usize {
        self.history.len()
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }
    /// Objective of the final assignment.
    pub fn inertia(&self) -> Energy {
        self.history.last().map(|r| r.inertia).unwrap_or(0.)
    }
}

/// A point set paired with its current centroids.
pub struct Run<'a> {
    points: &'a Points,
    config: &'a Config,
    kmeans: Vec<Centroid>,
}

impl Lloyd for Run<'_> {
    fn points(&self) -> &Points {
        self.points
    }
    fn kmeans(&self) -> &[Centroid] {
        &self.kmeans
    }
    fn config(&self) -> &Config {
        self.config
    }
}

impl<'a> Run<'a> {
    pub fn new(points: &'a Points, config: &'a Config, kmeans: Vec<Centroid>) -> Self {
        Self {
            points,
            config,
            kmeans,
        }
    }

    /// Iterates Assign → Update → Check until convergence or the cap.
    pub fn iterate(mut self) -> Clustering {
        log::info!(
            "{:<32}{:<32}",
            "kmeans iterating",
            format!("n={} k={}", self.points.len(), self.k())
        );
        let mut convergence = Convergence::new(self.config.threshold());
        let mut history = Vec::new();
        let mut assignment = Assignment::default();
        for iteration in 1..=self.config.max_iterations() {
            let (next, kmeans) = self.step();
            let drift = Convergence::drift(&self.kmeans, &kmeans);
            let inertia = self.inertia(&next, &kmeans);
            log::debug!("{:>5} drift {:>14.6} inertia {:>18.6}", iteration, drift, inertia);
            history.push(Record {
                iteration,
                drift,
                inertia,
            });
            self.kmeans = kmeans;
            assignment = next;
            if convergence.observe(drift) == State::Converged {
                log::info!("{:<32}{:<32}", "kmeans converged", format!("{} iterations", iteration));
                return Clustering {
                    centroids: self.kmeans,
                    assignment,
                    outcome: Outcome::Converged,
                    history,
                };
            }
        }
        log::warn!(
            "kmeans did not converge within {} iterations",
            self.config.max_iterations()
        );
        Clustering {
            centroids: self.kmeans,
            assignment,
            outcome: Outcome::Exhausted,
            history,
        }
    }
}

/// Orchestrates Seed → (Assign → Update → Check)* over a point set.
pub struct Engine {
    config: Config,
    rng: SmallRng,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self { config, rng })
    }
    /// Uses an explicit random source instead of the configured one.
    pub fn with_rng(config: Config, rng: SmallRng) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Seeds centroids and clusters the points.
    pub fn run(&mut self, points: &Points) -> Result<Clustering> {
        let seeds = self
            .config
            .seeding()
            .seed(points, self.config.k(), &mut self.rng)?;
        self.run_from(points, seeds)
    }

    /// Clusters the points starting from the given centroids.
    pub fn run_from(&self, points: &Points, seeds: Vec<Centroid>) -> Result<Clustering> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if seeds.len() != self.config.k() {
            return Err(Error::InvalidParameter {
                name: "seeds",
                message: "must hold exactly one centroid per cluster",
            });
        }
        Ok(Run::new(points, &self.config, seeds).iterate())
    }
}
