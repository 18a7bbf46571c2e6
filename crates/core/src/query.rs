use std::{convert::Infallible, error::Error as StdError};

/// A numeric statistic computed over a dataset.
///
/// Queries are what a privacy mechanism releases: a count, a sum, a mean.
/// Experiments evaluate a query on a dataset and on its neighbours to
/// measure how much one record can move the answer.
///
/// Closures of the form `Fn(&[T]) -> f64` are queries that never fail.
///
/// # Example
///
/// ```
/// use dplab_core::Query;
///
/// let max = |data: &[f64]| data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
/// assert_eq!(max.evaluate(&[1.0, 4.0, 2.0]), Ok(4.0));
/// ```
pub trait Query<T> {
    /// The error returned when the query is undefined for a dataset.
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the query on a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the query is undefined for `data`.
    fn evaluate(&self, data: &[T]) -> Result<f64, Self::Error>;
}

impl<T, F> Query<T> for F
where
    F: Fn(&[T]) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, data: &[T]) -> Result<f64, Self::Error> {
        Ok(self(data))
    }
}
