//! Empirical sensitivity of a query.
//!
//! The sensitivity of a query is the largest change in its answer between a
//! dataset and any neighbour. [`estimate`] samples random neighbours and
//! reports the largest and average change it observed, which is a lower bound
//! on the true sensitivity and a quick sanity check for the value passed to a
//! mechanism.

use std::error::Error as StdError;

use dplab_core::{Query, Record};
use rand::Rng;
use thiserror::Error;

use crate::neighbour;

/// Observed changes of a query across sampled neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of neighbours sampled.
    pub trials: usize,

    /// Largest observed `|q(D) - q(D')|`.
    pub max_change: f64,

    /// Average observed `|q(D) - q(D')|`.
    pub mean_change: f64,
}

/// Errors that can occur while estimating sensitivity.
#[derive(Debug, Error)]
pub enum Error {
    #[error("at least one trial is required")]
    ZeroTrials,

    #[error(transparent)]
    Neighbour(#[from] neighbour::Error),

    #[error("query error: {0}")]
    Query(Box<dyn StdError + Send + Sync>),
}

/// Estimates the sensitivity of `query` on `dataset` from `trials` neighbours.
///
/// # Errors
///
/// Returns an error if `trials` is zero, if a neighbour cannot be generated,
/// or if the query fails on the dataset or on a neighbour.
pub fn estimate<T, Q, R>(
    dataset: &[T],
    query: &Q,
    trials: usize,
    rng: &mut R,
) -> Result<Estimate, Error>
where
    T: Record,
    Q: Query<T>,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(Error::ZeroTrials);
    }

    let neighbours = neighbour::neighbours(dataset, rng)?;
    let answer = query
        .evaluate(dataset)
        .map_err(|e| Error::Query(Box::new(e)))?;

    let mut max_change = 0.0_f64;
    let mut total_change = 0.0;
    for neighbour in neighbours.take(trials) {
        let neighbour = neighbour?;
        let neighbour_answer = query
            .evaluate(neighbour.values())
            .map_err(|e| Error::Query(Box::new(e)))?;

        let change = (answer - neighbour_answer).abs();
        max_change = max_change.max(change);
        total_change += change;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_change = total_change / trials as f64;

    tracing::debug!(trials, max_change, mean_change, "estimated sensitivity");

    Ok(Estimate {
        trials,
        max_change,
        mean_change,
    })
}
