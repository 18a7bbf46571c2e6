//! Epsilon ranges for privacy-budget sweeps.
//!
//! An [`EpsilonRange`] holds the positive multiples of a step that lie
//! strictly below a maximum. Values are computed from an integer index:
//! with `div = 1 / epsilon_step`, the range yields `i / div` for every `i` in
//! `1..trunc(max_epsilon * div)`. The truncated, exclusive end means the
//! maximum itself is never produced, even when it is an exact multiple of the
//! step.
//!
//! Ranges holding more than [`EpsilonRange::MAX_LEN`] values are rejected, as
//! are steps so small that `1 / epsilon_step` overflows.
//!
//! # Example
//!
//! ```
//! use dplab_experiments::epsilon::EpsilonRange;
//!
//! let range = EpsilonRange::new(1.0, 0.25).unwrap();
//! assert_eq!(range.values(), vec![0.25, 0.5, 0.75]);
//! ```

use std::iter::FusedIterator;

use thiserror::Error;

/// A validated range of epsilon values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonRange {
    max_epsilon: f64,
    epsilon_step: f64,
    div: f64,
    end: usize,
}

/// Errors that can occur when building an [`EpsilonRange`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EpsilonError {
    #[error("max_epsilon must be finite and positive, got {value}")]
    MaxEpsilon { value: f64 },

    #[error("epsilon_step must be finite and positive, got {value}")]
    Step { value: f64 },

    #[error("max_epsilon / epsilon_step is {ratio}, above the limit of {limit} values")]
    TooManyValues { ratio: f64, limit: usize },
}

impl Default for EpsilonRange {
    fn default() -> Self {
        Self {
            max_epsilon: 1.0,
            epsilon_step: 0.1,
            div: 10.0,
            end: 10,
        }
    }
}

impl EpsilonRange {
    /// The largest number of values a range may hold.
    pub const MAX_LEN: usize = 1 << 24;

    /// Creates a range of epsilons below `max_epsilon` spaced by `epsilon_step`.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is non-finite, zero, or negative,
    /// or if the range would hold more than [`Self::MAX_LEN`] values.
    pub fn new(max_epsilon: f64, epsilon_step: f64) -> Result<Self, EpsilonError> {
        if !max_epsilon.is_finite() || max_epsilon <= 0.0 {
            return Err(EpsilonError::MaxEpsilon { value: max_epsilon });
        }
        if !epsilon_step.is_finite() || epsilon_step <= 0.0 {
            return Err(EpsilonError::Step {
                value: epsilon_step,
            });
        }

        let div = 1.0 / epsilon_step;
        let ratio = max_epsilon * div;

        #[allow(clippy::cast_precision_loss)]
        let limit = Self::MAX_LEN as f64;
        if !div.is_finite() || !ratio.is_finite() || ratio > limit {
            return Err(EpsilonError::TooManyValues {
                ratio,
                limit: Self::MAX_LEN,
            });
        }

        // The ratio is finite, positive, and at most `MAX_LEN`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let end = ratio as usize;

        Ok(Self {
            max_epsilon,
            epsilon_step,
            div,
            end,
        })
    }

    /// Returns the exclusive upper bound.
    #[must_use]
    pub fn max_epsilon(&self) -> f64 {
        self.max_epsilon
    }

    /// Returns the spacing between consecutive epsilons.
    #[must_use]
    pub fn epsilon_step(&self) -> f64 {
        self.epsilon_step
    }

    /// Returns an iterator over the epsilons in increasing order.
    #[must_use]
    pub fn iter(&self) -> Epsilons {
        Epsilons {
            next: 1,
            end: self.end,
            div: self.div,
        }
    }

    /// Collects the epsilons into a vector.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.iter().collect()
    }

    /// Returns the number of epsilons in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().len()
    }

    /// Returns `true` if the range yields no epsilons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for &EpsilonRange {
    type Item = f64;
    type IntoIter = Epsilons;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of an [`EpsilonRange`].
#[derive(Debug, Clone)]
pub struct Epsilons {
    next: usize,
    end: usize,
    div: f64,
}

impl Iterator for Epsilons {
    type Item = f64;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next as f64 / self.div;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Epsilons {}

impl FusedIterator for Epsilons {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn quarter_steps_below_one() {
        let range = EpsilonRange::new(1.0, 0.25).unwrap();

        assert_eq!(range.values(), vec![0.25, 0.5, 0.75]);
        assert_eq!(range.len(), 3);
    }

    #[test]
    fn maximum_equal_to_step_is_empty() {
        let range = EpsilonRange::new(0.5, 0.5).unwrap();

        assert!(range.is_empty());
        assert_eq!(range.values(), Vec::<f64>::new());
    }

    #[test]
    fn maximum_below_step_is_empty() {
        let range = EpsilonRange::new(0.1, 0.5).unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn tenth_steps_exclude_the_maximum() {
        let values = EpsilonRange::new(1.0, 0.1).unwrap().values();

        assert_eq!(values.len(), 9);
        for (i, value) in values.iter().enumerate() {
            assert_relative_eq!(*value, (i + 1) as f64 / 10.0, epsilon = 1e-12);
        }
        assert!(values.iter().all(|&v| v < 1.0));
    }

    #[test]
    fn truncation_drops_the_last_partial_step() {
        // 1.0 / 0.3 truncates to 3, so only indices 1 and 2 are produced.
        let values = EpsilonRange::new(1.0, 0.3).unwrap().values();

        assert_eq!(values.len(), 2);
        assert_relative_eq!(values[0], 0.3, epsilon = 1e-12);
        assert_relative_eq!(values[1], 0.6, epsilon = 1e-12);
    }

    #[test]
    fn values_are_strictly_increasing_and_positive() {
        let values = EpsilonRange::new(5.0, 0.05).unwrap().values();

        assert!(values[0] > 0.0);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(values.iter().all(|&v| v < 5.0));
    }

    #[test]
    fn iterator_reports_exact_size() {
        let range = EpsilonRange::new(2.0, 0.5).unwrap();
        let mut iter = range.iter();

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!((&range).into_iter().count(), 3);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            EpsilonRange::new(0.0, 0.1),
            Err(EpsilonError::MaxEpsilon { value: 0.0 })
        );
        assert_eq!(
            EpsilonRange::new(-1.0, 0.1),
            Err(EpsilonError::MaxEpsilon { value: -1.0 })
        );
        assert_eq!(
            EpsilonRange::new(1.0, 0.0),
            Err(EpsilonError::Step { value: 0.0 })
        );
        assert_eq!(
            EpsilonRange::new(1.0, -0.25),
            Err(EpsilonError::Step { value: -0.25 })
        );
        assert!(matches!(
            EpsilonRange::new(f64::NAN, 0.1),
            Err(EpsilonError::MaxEpsilon { .. })
        ));
        assert!(matches!(
            EpsilonRange::new(1.0, f64::INFINITY),
            Err(EpsilonError::Step { .. })
        ));
    }

    #[test]
    fn default_sweeps_tenths() {
        assert_eq!(EpsilonRange::default().len(), 9);
        assert_eq!(
            EpsilonRange::default(),
            EpsilonRange::new(1.0, 0.1).unwrap()
        );
    }

    #[test]
    fn huge_ratio_is_rejected() {
        assert!(matches!(
            EpsilonRange::new(1e10, 1e-10),
            Err(EpsilonError::TooManyValues { limit, .. }) if limit == EpsilonRange::MAX_LEN
        ));
        assert!(matches!(
            EpsilonRange::new(f64::MAX, 0.5),
            Err(EpsilonError::TooManyValues { .. })
        ));
    }

    #[test]
    fn subnormal_step_is_rejected() {
        assert!(matches!(
            EpsilonRange::new(1.0, 1e-310),
            Err(EpsilonError::TooManyValues { .. })
        ));
    }

    #[test]
    fn small_step_stays_positive() {
        let range = EpsilonRange::new(1.0, 1e-5).unwrap();
        let len = range.len();

        assert!((99_998..=99_999).contains(&len), "unexpected length {len}");
        let first: Vec<f64> = range.iter().take(3).collect();
        assert!(first.iter().all(|&v| v > 0.0));
        assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
        assert_relative_eq!(first[0], 1e-5, max_relative = 1e-12);
    }

    #[test]
    fn range_at_the_limit_is_accepted() {
        let range = EpsilonRange::new(1.0, 1.0 / 1024.0).unwrap();
        assert_eq!(range.len(), 1023);

        let max_len = EpsilonRange::MAX_LEN as f64;
        let range = EpsilonRange::new(max_len, 1.0).unwrap();
        assert_eq!(range.len(), EpsilonRange::MAX_LEN - 1);
    }
}
