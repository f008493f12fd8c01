//! Benchmark API
//!
//! Configuration types for the forecasting benchmark driver.

mod config;

pub use config::{BenchmarkConfig, DatasetConfig, FailurePolicy, Metric, ModelConfig};

// Re-export SPI types
pub use bench_spi::{
    BenchError, BenchmarkFailure, BenchmarkRecord, BenchmarkReport, Forecaster, Result,
    TimeSeries,
};
