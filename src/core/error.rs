//! Error types for the linkdist library
//!
//! Unreachable node pairs are not errors: they come back as the caller's
//! sentinel. The variants below only describe inputs that break the dense
//! N×N link-matrix contract, and are only produced by the validating entry
//! points.

use std::fmt;

/// Main error type for linkdist operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The matrix dimension was zero
    EmptyMatrix,

    /// A buffer does not hold exactly N×N entries
    DimensionMismatch {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The reverse matrix is not the transpose of the forward matrix.
    /// `row`/`col` address the first disagreeing forward entry.
    NotTranspose { row: usize, col: usize },

    /// Invalid configuration or parameters
    InvalidInput(String),

    /// The dedicated worker pool could not be started
    ThreadPool(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyMatrix => {
                write!(f, "Matrix dimension must be positive")
            }
            Error::DimensionMismatch {
                buffer,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch: {buffer} holds {actual} entries, expected {expected}"
                )
            }
            Error::NotTranspose { row, col } => {
                write!(
                    f,
                    "Reverse matrix is not the transpose of the forward matrix: \
                     forward[{row}][{col}] disagrees with reverse[{col}][{row}]"
                )
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {msg}")
            }
            Error::ThreadPool(msg) => {
                write!(f, "Thread pool error: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}

/// Convenience result type for linkdist operations
pub type Result<T> = std::result::Result<T, Error>;
