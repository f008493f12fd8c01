//! Time Series Service Provider Interface
//!
//! Defines the [`TimeSeries`] value type shared by scorers and forecasters,
//! together with the [`SeriesError`] type and its `Result` alias.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{Result, SeriesError};
pub use model::TimeSeries;
