//! Building blocks for differential-privacy experiments.
//!
//! # Modules
//!
//! - [`neighbour`] — random neighbouring datasets (one record added or removed)
//! - [`epsilon`] — epsilon ranges for privacy-budget sweeps
//! - [`mechanism`] — noise mechanisms, currently [`mechanism::laplace`]
//! - [`query`] — built-in statistics ([`query::Count`], [`query::Sum`], [`query::Mean`])
//! - [`sensitivity`] — empirical sensitivity of a query over sampled neighbours
//! - [`sweep`] — runs a mechanism across an epsilon range
//!
//! Every operation takes its random source as an explicit `&mut R` where
//! `R: rand::Rng`, so experiments are reproducible with a seeded generator and
//! hold no shared state between calls.

pub mod epsilon;
pub mod mechanism;
pub mod neighbour;
pub mod query;
pub mod sensitivity;
pub mod sweep;
