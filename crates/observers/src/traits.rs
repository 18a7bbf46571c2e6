//! Capability traits for cross-experiment observers.
//!
//! These traits abstract over experiment-specific event and action types,
//! enabling observers to work generically across different experiments.
//!
//! # Event traits
//!
//! - [`HasMessage`] — events with a human-readable description
//! - [`HasMeanAbsError`] — events that carry a mean absolute release error
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use dplab_core::Observer;
//! use dplab_observers::traits::{CanStopEarly, HasMeanAbsError};
//!
//! struct AfterPoints {
//!     limit: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasMeanAbsError, A: CanStopEarly> Observer<E, A> for AfterPoints {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         self.seen += 1;
//!         (self.seen >= self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use dplab_experiments::{neighbour, sweep};

/// An event with a human-readable description.
pub trait HasMessage {
    /// Returns the description of this event.
    fn message(&self) -> String;
}

/// An event that carries a mean absolute release error.
pub trait HasMeanAbsError {
    /// Returns the mean absolute error for this event.
    fn mean_abs_error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the experiment early.
    fn stop_early() -> Self;
}

// --- HasMessage impls ---

impl<T: Copy> HasMessage for neighbour::Event<T> {
    fn message(&self) -> String {
        neighbour::Event::message(self).to_owned()
    }
}

impl HasMessage for sweep::Event {
    fn message(&self) -> String {
        sweep::Event::message(self)
    }
}

// --- HasMeanAbsError for sweep::Event ---

impl HasMeanAbsError for sweep::Event {
    fn mean_abs_error(&self) -> f64 {
        self.point().mean_abs_error
    }
}

// --- CanStopEarly for sweep::Action ---

impl CanStopEarly for sweep::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
