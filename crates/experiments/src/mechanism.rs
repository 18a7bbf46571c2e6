//! Noise mechanisms that release query answers with differential privacy.
//!
//! # Mechanisms
//!
//! - [`laplace`] — additive Laplace noise calibrated to `sensitivity / epsilon`

pub mod laplace;

pub use laplace::{Laplace, LaplaceError};
