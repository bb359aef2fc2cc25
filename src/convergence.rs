use super::*;

/// Phase of the clustering loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Iterating,
    Converged,
}

/// Two-state displacement check between consecutive centroid sets.
///
/// Stays in `Iterating` while any centroid moved more than the threshold
/// (squared distance). Once `Converged` the state is terminal.
#[derive(Debug, Clone, Copy)]
pub struct Convergence {
    threshold: Energy,
    state: State,
}

impl Convergence {
    pub fn new(threshold: Energy) -> Self {
        Self {
            threshold,
            state: State::Iterating,
        }
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn threshold(&self) -> Energy {
        self.threshold
    }
    /// Largest squared displacement of any centroid, NaN if any
    /// displacement is NaN. Panics if the two sets differ in size.
    pub fn drift(old: &[Centroid], new: &[Centroid]) -> Energy {
        assert_eq!(
            old.len(),
            new.len(),
            "{} old centroids, {} new centroids",
            old.len(),
            new.len()
        );
        old.iter()
            .zip(new.iter())
            .map(|(a, b)| a.drift(b))
            .fold(0., |max, d| if d.is_nan() || d > max { d } else { max })
    }
    /// Advances the state machine with one pass worth of movement.
    pub fn check(&mut self, old: &[Centroid], new: &[Centroid]) -> State {
        self.observe(Self::drift(old, new))
    }
    /// Advances the state machine with an already-measured drift.
    /// A NaN drift never converges.
    pub fn observe(&mut self, drift: Energy) -> State {
        if self.state == State::Iterating && drift <= self.threshold {
            self.state = State::Converged;
        }
        self.state
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Self::new(CONVERGENCE_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_move_keeps_iterating() {
        let mut c = Convergence::default();
        let old = vec![Centroid::new(0., 0.), Centroid::new(10., 0.)];
        let new = vec![Centroid::new(0., 0.5), Centroid::new(10., 0.)];
        assert_eq!(c.check(&old, &new), State::Iterating);
    }

    #[test]
    fn any_single_centroid_blocks_convergence() {
        let mut c = Convergence::default();
        let old = vec![Centroid::new(0., 0.), Centroid::new(10., 0.)];
        let new = vec![Centroid::new(0., 0.), Centroid::new(10., 0.2)];
        assert!((Convergence::drift(&old, &new) - 0.04).abs() < 1e-12);
        assert_eq!(c.check(&old, &new), State::Iterating);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut c = Convergence::new(0.25);
        let old = vec![Centroid::new(0., 0.)];
        let new = vec![Centroid::new(0., 0.5)];
        assert_eq!(c.check(&old, &new), State::Converged);
        assert_eq!(c.state(), State::Converged);
    }

    #[test]
    fn small_move_converges() {
        let mut c = Convergence::default();
        let old = vec![Centroid::new(0., 0.), Centroid::new(10., 0.)];
        let new = vec![Centroid::new(0.05, 0.), Centroid::new(10., 0.05)];
        assert_eq!(c.check(&old, &new), State::Converged);
    }

    #[test]
    fn unmeasurable_drift_keeps_iterating() {
        let mut c = Convergence::default();
        assert_eq!(c.observe(f64::NAN), State::Iterating);
        assert_eq!(c.observe(f64::INFINITY), State::Iterating);
        let old = vec![Centroid::new(f64::INFINITY, 0.)];
        assert_eq!(c.check(&old, &old), State::Iterating);
        assert_eq!(c.observe(0.), State::Converged);
    }

    #[test]
    #[should_panic]
    fn cardinality_mismatch_is_fatal() {
        let mut c = Convergence::default();
        c.check(&[Centroid::default()], &[Centroid::default(), Centroid::default()]);
    }
}
