//! Anomaly Scorer Facade
//!
//! Unified re-exports for the anomaly scoring module.
//!
//! This facade provides a single entry point to all scoring functionality:
//! - `AnomalyScorer` trait, `ScorerCapabilities` and `TimeSeries` from SPI
//! - Configuration types from API
//! - Scorer implementations (`DifferenceScorer`, `NormScorer`) and the
//!   scoring pipeline from Core

// Re-export everything from SPI
pub use scorer_spi::*;

// Re-export everything from API
pub use scorer_api::*;

// Re-export everything from Core
pub use scorer_core::*;
