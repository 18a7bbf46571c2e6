//! Reusable observers for dplab experiments.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the experiments in [`dplab_experiments`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-experiment observers
//!   ([`HasMessage`], [`HasMeanAbsError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`ConsoleObserver`] — writes each event as a line (verbose mode)
//! - [`TracingObserver`] — logs each event through `tracing`
//! - [`ErrorTarget`] — stops a sweep once its error is small enough
//!
//! [`Observer`]: dplab_core::Observer
//! [`HasMessage`]: traits::HasMessage
//! [`HasMeanAbsError`]: traits::HasMeanAbsError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod console;
mod target;
mod trace;

pub use console::ConsoleObserver;
pub use target::ErrorTarget;
pub use trace::TracingObserver;
