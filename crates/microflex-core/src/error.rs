//! Error types for microplate operations
//!
//! Provides a unified error type for all microflex crates.

use crate::Window;
use thiserror::Error;

/// Core error type for container, arithmetic and statistics operations
#[derive(Error, Debug)]
pub enum Error {
    /// A begin/length window falls outside the data it addresses
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// Invalid argument provided to a statistic
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Plates or stacks with incompatible extents
    #[error("Dimension mismatch: expected {expected_rows}x{expected_columns}, got {rows}x{columns}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_columns: usize,
        rows: usize,
        columns: usize,
    },

    /// Insufficient data for the requested statistic
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Arithmetic failure such as division by zero
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Malformed well index or decimal text
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON mapping failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a window that does not fit `len` values
    pub fn window(window: Window, len: usize) -> Self {
        Self::InvalidIndex(format!(
            "window [{}, {}+{}) exceeds data of length {len}",
            window.begin(),
            window.begin(),
            window.length()
        ))
    }

    /// Create an error for empty input
    pub fn empty_input(statistic: &str) -> Self {
        tracing::trace!("{statistic} received no values");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a division or remainder with a zero divisor
    pub fn division_by_zero(operation: &str) -> Self {
        Self::Arithmetic(format!("{operation} by zero"))
    }

    /// Re-tag an index error as an argument error, keeping the message
    pub fn into_argument(self) -> Self {
        match self {
            Self::InvalidIndex(message) => Self::InvalidArgument(message),
            other => other,
        }
    }
}
