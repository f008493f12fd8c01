//! Time series error types.

use thiserror::Error;

/// Errors raised while building or combining time series.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    /// A series must hold at least one time step and one component
    #[error("Empty series: {0}")]
    Empty(String),

    /// Value buffer does not match the declared shape
    #[error("Shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Time index is not strictly increasing
    #[error("Time index must be strictly increasing (violated at position {position})")]
    NonMonotonicIndex { position: usize },

    #[error("Duplicate component name: {0}")]
    DuplicateComponent(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// Two series do not share time index and component structure
    #[error("Series are not aligned: {0}")]
    Misaligned(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type alias for time series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
