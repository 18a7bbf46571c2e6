//! Privacy-budget sweeps.
//!
//! A sweep runs the [`Laplace`] mechanism on a query across an
//! [`EpsilonRange`]. At each epsilon it repeatedly draws a neighbour `D'`,
//! releases `q(D)` and `q(D')`, and summarizes the releases in a [`Point`]:
//!
//! - `mean_abs_error` shows the accuracy cost of the budget
//! - `mean_release_gap` shows how distinguishable `D` and `D'` remain
//!
//! # Observer Events
//!
//! The sweep emits one [`Event::Evaluated`] per epsilon. Observers can return
//! [`Action::StopEarly`] to end the sweep after that point; the result then has
//! [`Status::StoppedByObserver`] and holds every point evaluated so far.
//!
//! [`Laplace`]: crate::mechanism::Laplace

mod action;
mod config;
mod error;
mod event;
mod point;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use point::Point;

use dplab_core::{Bounds, Observer, Query, Record};
use rand::Rng;

use crate::{epsilon::EpsilonRange, mechanism::Laplace, neighbour};

/// Indicates how a sweep finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every epsilon in the range was evaluated.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Final sweep status.
    pub status: Status,

    /// One point per evaluated epsilon, in increasing epsilon order.
    pub points: Vec<Point>,
}

/// Runs a privacy-budget sweep.
///
/// The observer receives an [`Event`] after each epsilon.
///
/// # Errors
///
/// Returns an error if the dataset is invalid, a neighbour cannot be
/// generated, or the query fails on the dataset or a neighbour.
pub fn run<T, Q, R, Obs>(
    dataset: &[T],
    query: &Q,
    epsilons: &EpsilonRange,
    config: &Config,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Sweep, Error>
where
    T: Record,
    Q: Query<T>,
    R: Rng + ?Sized,
    Obs: Observer<Event, Action>,
{
    Bounds::of(dataset).map_err(neighbour::Error::from)?;
    let answer = evaluate(query, dataset)?;

    let mut points = Vec::new();
    for (index, epsilon) in epsilons.iter().enumerate() {
        let mechanism = Laplace::new(config.sensitivity(), epsilon)?;
        let point = evaluate_point(dataset, query, answer, &mechanism, config.trials(), rng)?;

        tracing::debug!(
            epsilon,
            mean_abs_error = point.mean_abs_error,
            mean_release_gap = point.mean_release_gap,
            "evaluated epsilon"
        );

        points.push(point);

        let event = Event::Evaluated { index, point };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(index, "sweep stopped by observer");
            return Ok(Sweep {
                status: Status::StoppedByObserver,
                points,
            });
        }
    }

    Ok(Sweep {
        status: Status::Completed,
        points,
    })
}

/// Runs a privacy-budget sweep without observer support.
///
/// # Errors
///
/// See [`run`].
pub fn run_unobserved<T, Q, R>(
    dataset: &[T],
    query: &Q,
    epsilons: &EpsilonRange,
    config: &Config,
    rng: &mut R,
) -> Result<Sweep, Error>
where
    T: Record,
    Q: Query<T>,
    R: Rng + ?Sized,
{
    run(dataset, query, epsilons, config, rng, ())
}

fn evaluate<T, Q: Query<T>>(query: &Q, data: &[T]) -> Result<f64, Error> {
    query.evaluate(data).map_err(|e| Error::Query(Box::new(e)))
}

/// Releases the dataset and a fresh neighbour `trials` times at one epsilon.
fn evaluate_point<T, Q, R>(
    dataset: &[T],
    query: &Q,
    answer: f64,
    mechanism: &Laplace,
    trials: usize,
    rng: &mut R,
) -> Result<Point, Error>
where
    T: Record,
    Q: Query<T>,
    R: Rng + ?Sized,
{
    let mut total_error = 0.0;
    let mut total_gap = 0.0;

    for _ in 0..trials {
        let neighbour = neighbour::generate_unobserved(dataset, rng)?;
        let neighbour_answer = evaluate(query, neighbour.values())?;

        let release = mechanism.release(answer, rng);
        let neighbour_release = mechanism.release(neighbour_answer, rng);

        total_error += (release - answer).abs();
        total_gap += (release - neighbour_release).abs();
    }

    #[allow(clippy::cast_precision_loss)]
    let trials = trials as f64;

    Ok(Point {
        epsilon: mechanism.epsilon(),
        scale: mechanism.scale(),
        mean_abs_error: total_error / trials,
        mean_release_gap: total_gap / trials,
    })
}
