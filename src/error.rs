//! Error surface of the crate.

use thiserror::Error;

/// An error raised by the dispatcher or the dynamic engine.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum SkylineError {
    /// The requested algorithm name is not one of "bnl", "dnc", "skytree".
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// A point's length disagrees with the preference vector or with the
    /// other points of the dataset.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
