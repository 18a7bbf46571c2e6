//! Core traits and types for dplab.
//!
//! This crate defines the shared abstractions that experiments, observers,
//! and notebook adapters build on:
//!
//! - [`Record`] — a numeric dataset element that can be validated and sampled
//! - [`Bounds`] — the minimum and maximum of a dataset
//! - [`Query`] — a numeric statistic computed over a dataset
//! - [`Observer`] — receives experiment events and optionally returns control actions

mod bounds;
mod observer;
mod query;
mod record;

pub use bounds::{Bounds, BoundsError};
pub use observer::Observer;
pub use query::Query;
pub use record::{Record, SampleError};
