//! Error types for anomaly scoring.

mod scorer_error;

pub use scorer_error::{Result, ScorerError};
