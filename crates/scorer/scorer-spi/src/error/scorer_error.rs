//! Anomaly scoring error types.

use series_spi::SeriesError;
use thiserror::Error;

/// Anomaly scoring errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// Input series are malformed or not aligned with each other.
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Scorer '{scorer}' requires both an actual and a predicted series")]
    SingleSeriesUnsupported { scorer: String },

    #[error("Scorer '{scorer}' does not accept probabilistic series; reduce to a point estimate first")]
    ProbabilisticUnsupported { scorer: String },

    #[error("Scorer '{scorer}' not fitted: call fit() before scoring")]
    NotFitted { scorer: String },

    #[error("Scorer '{scorer}' is not fittable")]
    NotFittable { scorer: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ScorerError {
    /// Whether this error reports mismatched time index or component structure.
    pub fn is_alignment_error(&self) -> bool {
        matches!(self, ScorerError::Series(SeriesError::Misaligned(_)))
    }
}

/// Result type for anomaly scoring operations.
pub type Result<T> = std::result::Result<T, ScorerError>;
