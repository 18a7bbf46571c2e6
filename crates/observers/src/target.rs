//! Stopping a sweep once accuracy is good enough.

use dplab_core::Observer;

use crate::traits::{CanStopEarly, HasMeanAbsError};

/// An observer that stops once the mean absolute error reaches a target.
///
/// Sweeps visit epsilons in increasing order, and error shrinks as epsilon
/// grows, so the first point at or below the target is the smallest budget
/// that meets the accuracy goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorTarget {
    target: f64,
}

impl ErrorTarget {
    /// Creates an observer that stops at `target` mean absolute error.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the target mean absolute error.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl<E: HasMeanAbsError, A: CanStopEarly> Observer<E, A> for ErrorTarget {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.mean_abs_error() <= self.target).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use dplab_experiments::{
        epsilon::EpsilonRange,
        query::Count,
        sweep::{self, Config, Status},
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn stops_at_the_first_accurate_epsilon() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let epsilons = EpsilonRange::new(5.0, 0.5).unwrap();
        let config = Config::new(5000, 1.0).unwrap();

        let sweep = sweep::run(
            &[1, 2, 3, 4],
            &Count,
            &epsilons,
            &config,
            &mut rng,
            ErrorTarget::new(0.6),
        )
        .unwrap();

        // Scale 1/epsilon first drops below 0.6 at epsilon 2.0.
        assert_eq!(sweep.status, Status::StoppedByObserver);
        let last = sweep.points.last().unwrap();
        assert!(last.mean_abs_error <= 0.6);
        assert!((last.epsilon - 2.0).abs() < 1e-9, "stopped at {}", last.epsilon);
    }

    #[test]
    fn unreachable_target_completes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let epsilons = EpsilonRange::new(1.0, 0.25).unwrap();
        let config = Config::new(50, 1.0).unwrap();

        let sweep = sweep::run(
            &[1, 2],
            &Count,
            &epsilons,
            &config,
            &mut rng,
            ErrorTarget::new(0.0),
        )
        .unwrap();

        assert_eq!(sweep.status, Status::Completed);
        assert_eq!(sweep.points.len(), 3);
    }
}
