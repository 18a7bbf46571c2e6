use dplab_core::{BoundsError, SampleError};
use thiserror::Error;

/// Errors that can occur while generating a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("cannot build a neighbour of an empty dataset")]
    EmptyDataset,

    #[error("record at index {index} is not finite")]
    NonFinite { index: usize },

    #[error("cannot add a record: no integer lies within [{min}, {max}]")]
    NoIntegerInRange { min: f64, max: f64 },
}

impl From<BoundsError> for Error {
    fn from(err: BoundsError) -> Self {
        match err {
            BoundsError::Empty => Self::EmptyDataset,
            BoundsError::NonFinite { index } => Self::NonFinite { index },
        }
    }
}

impl From<SampleError> for Error {
    fn from(err: SampleError) -> Self {
        match err {
            SampleError::NoIntegerInRange { min, max } => Self::NoIntegerInRange { min, max },
        }
    }
}
