use thiserror::Error;

use crate::Record;

/// The minimum and maximum records of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

/// Errors that can occur when computing [`Bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("dataset is empty")]
    Empty,

    #[error("record at index {index} is not finite")]
    NonFinite { index: usize },
}

impl<T: Record> Bounds<T> {
    /// Computes the bounds of a dataset.
    ///
    /// Every record is checked, so a successful result also means the whole
    /// dataset is finite.
    ///
    /// # Errors
    ///
    /// Returns [`BoundsError::Empty`] for an empty slice, or
    /// [`BoundsError::NonFinite`] with the index of the first non-finite record.
    pub fn of(data: &[T]) -> Result<Self, BoundsError> {
        let (first, rest) = data.split_first().ok_or(BoundsError::Empty)?;
        if !first.is_finite() {
            return Err(BoundsError::NonFinite { index: 0 });
        }

        let mut bounds = Self {
            min: *first,
            max: *first,
        };

        for (offset, value) in rest.iter().enumerate() {
            if !value.is_finite() {
                return Err(BoundsError::NonFinite { index: offset + 1 });
            }
            if *value < bounds.min {
                bounds.min = *value;
            }
            if *value > bounds.max {
                bounds.max = *value;
            }
        }

        Ok(bounds)
    }

    /// Returns `true` if `value` lies within the bounds, inclusive.
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}
