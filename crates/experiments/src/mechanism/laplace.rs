//! The Laplace mechanism.
//!
//! For a query `q` with sensitivity `Δ`, releasing `q(D) + Lap(0, Δ/ε)`
//! satisfies ε-differential privacy: for any neighbouring datasets `D` and
//! `D'` and any set of outputs `S`,
//!
//! ```text
//! P[M(D) ∈ S] ≤ e^ε · P[M(D') ∈ S]
//! ```
//!
//! Noise is drawn by inverting the Laplace CDF. With `u ~ U[-0.5, 0.5)` and
//! scale `b`,
//!
//! ```text
//! noise = -b · sign(u) · ln(1 - 2|u|)
//! ```

use rand::Rng;
use thiserror::Error;

/// A Laplace mechanism with a fixed sensitivity and privacy budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    sensitivity: f64,
    epsilon: f64,
}

/// Errors that can occur when building a [`Laplace`] mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LaplaceError {
    #[error("sensitivity must be finite and positive, got {value}")]
    Sensitivity { value: f64 },

    #[error("epsilon must be finite and positive, got {value}")]
    Epsilon { value: f64 },
}

impl Laplace {
    /// Creates a mechanism for a query with the given sensitivity.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is non-finite, zero, or negative.
    pub fn new(sensitivity: f64, epsilon: f64) -> Result<Self, LaplaceError> {
        if !sensitivity.is_finite() || sensitivity <= 0.0 {
            return Err(LaplaceError::Sensitivity { value: sensitivity });
        }
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(LaplaceError::Epsilon { value: epsilon });
        }

        Ok(Self {
            sensitivity,
            epsilon,
        })
    }

    /// Returns the query sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Returns the privacy budget.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the noise scale `sensitivity / epsilon`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.sensitivity / self.epsilon
    }

    /// Draws one sample of `Lap(0, scale)`.
    pub fn sample_noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let u = rng.random::<f64>() - 0.5;
            let tail = 1.0 - 2.0 * u.abs();

            // u = -0.5 maps to ln(0).
            if tail > 0.0 {
                return -self.scale() * u.signum() * tail.ln();
            }
        }
    }

    /// Releases `value` with Laplace noise added.
    pub fn release<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        value + self.sample_noise(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scale_is_sensitivity_over_epsilon() {
        let mechanism = Laplace::new(2.0, 0.5).unwrap();
        assert_relative_eq!(mechanism.scale(), 4.0);
    }

    #[test]
    fn noise_matches_laplace_moments() {
        let mechanism = Laplace::new(1.0, 0.5).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        let n = 50_000;
        let samples: Vec<f64> = (0..n).map(|_| mechanism.sample_noise(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / f64::from(n);
        let mean_abs = samples.iter().map(|s| s.abs()).sum::<f64>() / f64::from(n);

        // Lap(0, b) has mean 0 and mean absolute value b.
        assert!(mean.abs() < 0.1, "mean {mean}");
        assert_relative_eq!(mean_abs, mechanism.scale(), max_relative = 0.05);
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn release_centres_on_the_true_value() {
        let mechanism = Laplace::new(1.0, 1.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let n = 20_000;
        let mean = (0..n)
            .map(|_| mechanism.release(100.0, &mut rng))
            .sum::<f64>()
            / f64::from(n);

        assert_relative_eq!(mean, 100.0, epsilon = 0.1);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            Laplace::new(0.0, 1.0),
            Err(LaplaceError::Sensitivity { value: 0.0 })
        );
        assert_eq!(
            Laplace::new(1.0, -2.0),
            Err(LaplaceError::Epsilon { value: -2.0 })
        );
        assert!(matches!(
            Laplace::new(f64::INFINITY, 1.0),
            Err(LaplaceError::Sensitivity { .. })
        ));
    }
}
