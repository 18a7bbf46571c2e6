//! Notebook-style helpers for differential-privacy experiments.
//!
//! These functions wrap the typed APIs in [`dplab_experiments`] with the
//! small, forgiving signatures that suit interactive exploration:
//!
//! - [`create_neighbour`] — a random neighbour of a dataset, optionally
//!   printing which branch was taken
//! - [`get_epsilons`] — the epsilons to sweep over
//! - [`print_hline`] — a separator line between printed results
//!
//! Randomness comes from [`rand::rng`], a thread-local generator seeded by the
//! operating system, so every helper is safe to call from any thread. Use the
//! functions in [`dplab_experiments`] directly for seeded, reproducible runs.
//!
//! # Example
//!
//! ```
//! use dplab_notebook::{create_neighbour, get_epsilons};
//!
//! let dataset = [1, 2, 3, 4, 5];
//! let neighbour = create_neighbour(&dataset, false).unwrap();
//! assert!(neighbour.len() == 4 || neighbour.len() == 6);
//!
//! assert_eq!(get_epsilons(1.0, 0.25).unwrap(), vec![0.25, 0.5, 0.75]);
//! ```

pub mod hline;

pub use hline::{hline, print_hline, write_hline};

use dplab_core::Record;
use dplab_experiments::{
    epsilon::{EpsilonError, EpsilonRange},
    neighbour,
};
use dplab_observers::ConsoleObserver;

/// Creates a neighbouring dataset with one random record added or removed.
///
/// When `verbose` is set, prints `Subtracting value` or `Adding value` to
/// standard output. The flag has no effect on the result.
///
/// # Errors
///
/// Returns [`neighbour::Error::EmptyDataset`] for an empty dataset, and the
/// other [`neighbour::Error`] variants for non-finite records or float bounds
/// that contain no integer.
pub fn create_neighbour<T: Record>(
    data: &[T],
    verbose: bool,
) -> Result<Vec<T>, neighbour::Error> {
    let mut rng = rand::rng();
    let neighbour = if verbose {
        neighbour::generate(data, &mut rng, ConsoleObserver::stdout())?
    } else {
        neighbour::generate_unobserved(data, &mut rng)?
    };
    Ok(neighbour.into_values())
}

/// Returns the epsilons below `max_epsilon` spaced by `epsilon_step`.
///
/// See [`EpsilonRange`] for the exact values produced.
///
/// # Errors
///
/// Returns an error if either parameter is non-finite, zero, or negative.
pub fn get_epsilons(max_epsilon: f64, epsilon_step: f64) -> Result<Vec<f64>, EpsilonError> {
    Ok(EpsilonRange::new(max_epsilon, epsilon_step)?.values())
}
