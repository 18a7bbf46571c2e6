use std::iter::FusedIterator;

use dplab_core::{Bounds, Record};
use rand::Rng;

use super::{Branch, Neighbour, apply, shuffled};

/// An endless iterator of independent neighbours of one dataset.
///
/// Created by [`neighbours`](super::neighbours). Each item is the result of a
/// fresh call to the generator, so a float dataset can still yield
/// [`Error::NoIntegerInRange`](super::Error::NoIntegerInRange) items.
pub struct Neighbours<'d, 'r, T, R: ?Sized> {
    dataset: &'d [T],
    bounds: Bounds<T>,
    rng: &'r mut R,
}

impl<'d, 'r, T, R> Neighbours<'d, 'r, T, R>
where
    T: Record,
    R: Rng + ?Sized,
{
    pub(super) fn new(dataset: &'d [T], bounds: Bounds<T>, rng: &'r mut R) -> Self {
        Self {
            dataset,
            bounds,
            rng,
        }
    }
}

impl<T, R> Iterator for Neighbours<'_, '_, T, R>
where
    T: Record,
    R: Rng + ?Sized,
{
    type Item = Result<Neighbour<T>, super::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let rng = &mut *self.rng;
        let values = shuffled(self.dataset, rng);
        let branch = Branch::random(rng);
        Some(apply(values, self.bounds, branch, rng, ()))
    }
}

impl<T, R> FusedIterator for Neighbours<'_, '_, T, R>
where
    T: Record,
    R: Rng + ?Sized,
{
}
