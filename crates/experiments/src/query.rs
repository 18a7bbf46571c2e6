//! Built-in queries.
//!
//! Each query here has sensitivity that is easy to reason about, which makes
//! them useful baselines for sweeps:
//!
//! - [`Count`] — the number of records (sensitivity 1)
//! - [`Sum`] — the sum of records (sensitivity bounded by the record range)
//! - [`Mean`] — the arithmetic mean (undefined for an empty dataset)

use std::convert::Infallible;

use dplab_core::{Query, Record};
use thiserror::Error;

/// Counts the records in a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count;

/// Sums the records in a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

/// Averages the records in a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

/// Errors returned by [`Mean`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MeanError {
    #[error("mean of an empty dataset is undefined")]
    Empty,
}

impl<T> Query<T> for Count {
    type Error = Infallible;

    #[allow(clippy::cast_precision_loss)]
    fn evaluate(&self, data: &[T]) -> Result<f64, Self::Error> {
        Ok(data.len() as f64)
    }
}

impl<T: Record> Query<T> for Sum {
    type Error = Infallible;

    fn evaluate(&self, data: &[T]) -> Result<f64, Self::Error> {
        Ok(data.iter().map(|value| value.to_f64()).sum())
    }
}

impl<T: Record> Query<T> for Mean {
    type Error = MeanError;

    #[allow(clippy::cast_precision_loss)]
    fn evaluate(&self, data: &[T]) -> Result<f64, Self::Error> {
        if data.is_empty() {
            return Err(MeanError::Empty);
        }
        let total: f64 = data.iter().map(|value| value.to_f64()).sum();
        Ok(total / data.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn count_sum_and_mean() {
        let data = [1, 2, 3, 4];

        assert_eq!(Count.evaluate(&data), Ok(4.0));
        assert_eq!(Sum.evaluate(&data), Ok(10.0));
        assert_relative_eq!(Mean.evaluate(&data).unwrap(), 2.5);
    }

    #[test]
    fn empty_dataset() {
        let data: [f64; 0] = [];

        assert_eq!(Count.evaluate(&data), Ok(0.0));
        assert_eq!(Sum.evaluate(&data), Ok(0.0));
        assert_eq!(Mean.evaluate(&data), Err(MeanError::Empty));
    }
}
