//! Benchmark Core
//!
//! Baseline forecasters, dataset loading, single-model evaluation and the
//! benchmark runner.

mod dataset;
mod evaluate;
mod models;
mod registry;
mod runner;

pub use dataset::*;
pub use evaluate::*;
pub use models::*;
pub use registry::*;
pub use runner::*;

// Re-export API types
pub use bench_api::{BenchmarkConfig, DatasetConfig, FailurePolicy, Metric, ModelConfig};

// Re-export SPI types
pub use bench_spi::{
    BenchError, BenchmarkFailure, BenchmarkRecord, BenchmarkReport, Forecaster, Result,
    TimeSeries,
};
