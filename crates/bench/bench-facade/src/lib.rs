//! Benchmark Facade
//!
//! Unified re-exports for the forecasting benchmark:
//! - `Forecaster` trait, result records and errors from SPI
//! - `BenchmarkConfig` and friends from API
//! - Baseline models, dataset loading and `BenchmarkRunner` from Core

// Re-export everything from SPI
pub use bench_spi::*;

// Re-export everything from API
pub use bench_api::*;

// Re-export everything from Core
pub use bench_core::*;
