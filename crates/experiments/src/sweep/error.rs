use thiserror::Error;

use crate::{mechanism::LaplaceError, neighbour};

/// Errors that can occur during a sweep.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Neighbour(#[from] neighbour::Error),

    #[error(transparent)]
    Mechanism(#[from] LaplaceError),

    #[error("query error: {0}")]
    Query(Box<dyn std::error::Error + Send + Sync>),
}
