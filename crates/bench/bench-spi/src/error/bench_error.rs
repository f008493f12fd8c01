//! Benchmark error types.

use series_spi::SeriesError;
use thiserror::Error;

/// Errors raised while loading data, building models or evaluating them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BenchError {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("Model must be fitted before prediction")]
    NotFitted,

    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Dataset '{name}': {reason}")]
    Dataset { name: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = BenchError::InsufficientData {
            required: 12,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data: need at least 12 points, got 3"
        );
    }

    #[test]
    fn test_dataset_display() {
        let error = BenchError::Dataset {
            name: "Sunspots".to_string(),
            reason: "missing target column".to_string(),
        };
        assert_eq!(error.to_string(), "Dataset 'Sunspots': missing target column");
    }

    #[test]
    fn test_series_error_converts() {
        let error: BenchError = SeriesError::Misaligned("length 2 vs 3".to_string()).into();
        assert_eq!(error.to_string(), "Series are not aligned: length 2 vs 3");
    }

    #[test]
    fn test_not_fitted_equality() {
        assert_eq!(BenchError::NotFitted, BenchError::NotFitted);
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BenchError>();
    }
}
