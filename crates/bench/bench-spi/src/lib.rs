//! Benchmark Service Provider Interface
//!
//! Defines the forecaster contract the benchmark driver evaluates, the result
//! records it produces and its error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{BenchError, Result};
pub use model::{BenchmarkFailure, BenchmarkRecord, BenchmarkReport};

pub use series_spi::{SeriesError, TimeSeries};
