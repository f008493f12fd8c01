//! Anomaly Scorer Service Provider Interface
//!
//! Defines the contract every anomaly scorer implements, the declarative
//! capability flags the scoring pipeline dispatches on, and the error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AnomalyScorer;
pub use error::{Result, ScorerError};
pub use model::ScorerCapabilities;

pub use series_spi::{SeriesError, TimeSeries};
