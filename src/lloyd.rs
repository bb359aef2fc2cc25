use super::*;

/// One pass of Lloyd's algorithm over a fixed point set.
///
/// Implementors supply the data and the current centroids; the default
/// methods carry the algorithm.
///
/// # Implementation
///
/// - `assign()` — Nearest-centroid or capacity-balanced assignment
/// - `centroids()` — Means of the assigned points
/// - `step()` — Assign then update, leaving `self` untouched
/// - `inertia()` — Objective for diagnostics and monotonicity checks
pub trait Lloyd {
    /// Returns the points being clustered.
    fn points(&self) -> &Points;
    /// Returns current centroid positions.
    fn kmeans(&self) -> &[Centroid];
    /// Returns run parameters.
    fn config(&self) -> &Config;

    /// Number of clusters.
    fn k(&self) -> usize {
        self.kmeans().len()
    }
    /// Assigns every point against the current centroids.
    fn assign(&self) -> Assignment {
        match self.config().is_balanced() {
            true => Balancer::from((self.points(), self.kmeans())).assign(),
            false => Assignment::nearest(self.points(), self.kmeans()),
        }
    }
    /// Computes new centroids from an assignment.
    fn centroids(&self, assignment: &Assignment) -> Vec<Centroid> {
        update(
            self.points(),
            assignment,
            self.kmeans(),
            self.config().is_weighted(),
            self.config().vacancy(),
        )
    }
    /// Executes one assign/update pass.
    fn step(&self) -> (Assignment, Vec<Centroid>) {
        let assignment = self.assign();
        let kmeans = self.centroids(&assignment);
        (assignment, kmeans)
    }
    /// Sum of squared distances from each point to its assigned centroid
    /// in `kmeans`, population-weighted when means are.
    fn inertia(&self, assignment: &Assignment, kmeans: &[Centroid]) -> Energy {
        assignment.inertia(self.points(), kmeans, self.config().is_weighted())
    }
}
