//! Random neighbouring datasets.
//!
//! Two datasets are neighbours when one can be obtained from the other by
//! adding or removing exactly one record. Differential-privacy experiments
//! compare a mechanism's output on a dataset against its output on a
//! neighbour.
//!
//! # Algorithm
//!
//! 1. Validate the dataset by computing its [`Bounds`] (before any draw).
//! 2. Copy and shuffle the records.
//! 3. Draw an unbiased bit to pick a [`Branch`]:
//!    - [`Branch::Subtract`] removes the first record of the shuffled copy.
//!    - [`Branch::Add`] appends a record drawn uniformly from the inclusive
//!      integer interval `[min, max]` of the dataset.
//! 4. Emit one [`Event`] describing the branch.
//!
//! The input is never mutated. Random draws happen in a fixed order: the
//! shuffle, the branch bit, then the added record.
//!
//! # Observer Events
//!
//! Each call emits exactly one [`Event`] after the mutation. Its
//! [`message`](Event::message) is `"Subtracting value"` or `"Adding value"`,
//! which is what a verbose console observer prints. Observers cannot change
//! the result, so the action type is [`Infallible`].
//!
//! [`Bounds`]: dplab_core::Bounds

mod branch;
mod change;
mod error;
mod event;
mod iter;


pub use branch::Branch;
pub use change::{Change, Neighbour};
pub use error::Error;
pub use event::Event;
pub use iter::Neighbours;

use std::convert::Infallible;

use dplab_core::{Bounds, Observer, Record};
use rand::{Rng, seq::SliceRandom};

/// Generates a random neighbour of `dataset`.
///
/// The observer receives one [`Event`] describing which branch was taken.
///
/// # Errors
///
/// Returns an error if the dataset is empty or contains a non-finite record,
/// or if the add branch cannot draw a record (see [`Error::NoIntegerInRange`]).
pub fn generate<T, R, Obs>(
    dataset: &[T],
    rng: &mut R,
    observer: Obs,
) -> Result<Neighbour<T>, Error>
where
    T: Record,
    R: Rng + ?Sized,
    Obs: Observer<Event<T>, Infallible>,
{
    let bounds = Bounds::of(dataset)?;
    let shuffled = shuffled(dataset, rng);
    let branch = Branch::random(rng);
    apply(shuffled, bounds, branch, rng, observer)
}

/// Generates a random neighbour of `dataset` without observer support.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_unobserved<T, R>(dataset: &[T], rng: &mut R) -> Result<Neighbour<T>, Error>
where
    T: Record,
    R: Rng + ?Sized,
{
    generate(dataset, rng, ())
}

/// Generates a neighbour of `dataset` using the given branch.
///
/// The records are still shuffled, and the added record is still random;
/// only the choice between adding and removing is fixed.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_branch<T, R, Obs>(
    dataset: &[T],
    branch: Branch,
    rng: &mut R,
    observer: Obs,
) -> Result<Neighbour<T>, Error>
where
    T: Record,
    R: Rng + ?Sized,
    Obs: Observer<Event<T>, Infallible>,
{
    let bounds = Bounds::of(dataset)?;
    let shuffled = shuffled(dataset, rng);
    apply(shuffled, bounds, branch, rng, observer)
}

/// Returns an endless iterator of independent neighbours of `dataset`.
///
/// The dataset is validated once, up front.
///
/// # Errors
///
/// Returns an error if the dataset is empty or contains a non-finite record.
pub fn neighbours<'d, 'r, T, R>(
    dataset: &'d [T],
    rng: &'r mut R,
) -> Result<Neighbours<'d, 'r, T, R>, Error>
where
    T: Record,
    R: Rng + ?Sized,
{
    let bounds = Bounds::of(dataset)?;
    Ok(Neighbours::new(dataset, bounds, rng))
}

fn shuffled<T, R>(dataset: &[T], rng: &mut R) -> Vec<T>
where
    T: Record,
    R: Rng + ?Sized,
{
    let mut values = dataset.to_vec();
    values.shuffle(rng);
    values
}

/// Applies the branch to an already shuffled copy and notifies the observer.
fn apply<T, R, Obs>(
    mut values: Vec<T>,
    bounds: Bounds<T>,
    branch: Branch,
    rng: &mut R,
    mut observer: Obs,
) -> Result<Neighbour<T>, Error>
where
    T: Record,
    R: Rng + ?Sized,
    Obs: Observer<Event<T>, Infallible>,
{
    let (change, event) = match branch {
        Branch::Subtract => {
            let value = values.remove(0);
            (Change::Removed(value), Event::Subtracting { value })
        }
        Branch::Add => {
            let value = T::sample_inclusive(bounds.min, bounds.max, rng)?;
            values.push(value);
            (Change::Added(value), Event::Adding { value, bounds })
        }
    };

    // The action type is uninhabited.
    let _ = observer.observe(&event);

    Ok(Neighbour::new(values, change))
}
