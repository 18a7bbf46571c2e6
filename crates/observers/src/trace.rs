//! Structured logging of experiment events.

use dplab_core::Observer;
use tracing::Level;

use crate::traits::HasMessage;

/// An observer that logs each event message through `tracing`.
///
/// Events are logged under the `dplab` target at the configured level, so
/// they can be filtered with `RUST_LOG=dplab=debug` and friends.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    level: Level,
}

impl TracingObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl<E: HasMessage, A> Observer<E, A> for TracingObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let message = event.message();
        match self.level {
            Level::ERROR => tracing::error!(target: "dplab", "{message}"),
            Level::WARN => tracing::warn!(target: "dplab", "{message}"),
            Level::INFO => tracing::info!(target: "dplab", "{message}"),
            Level::DEBUG => tracing::debug!(target: "dplab", "{message}"),
            _ => tracing::trace!(target: "dplab", "{message}"),
        }
        None
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
    fn logs_without_changing_the_sweep() {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_max_level(Level::TRACE)
                .with_test_writer()
                .finish(),
        );

        let epsilons = EpsilonRange::new(1.0, 0.5).unwrap();
        let config = Config::new(10, 1.0).unwrap();

        let logged = sweep::run(
            &[1, 2, 3],
            &Count,
            &epsilons,
            &config,
            &mut ChaCha8Rng::seed_from_u64(6),
            TracingObserver::new(Level::DEBUG),
        )
        .unwrap();
        let silent = sweep::run_unobserved(
            &[1, 2, 3],
            &Count,
            &epsilons,
            &config,
            &mut ChaCha8Rng::seed_from_u64(6),
        )
        .unwrap();

        assert_eq!(logged.status, Status::Completed);
        assert_eq!(logged, silent);
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(TracingObserver::default().level(), Level::INFO);
    }
}
