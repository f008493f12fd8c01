//! Error types for the benchmark driver.

mod bench_error;

pub use bench_error::{BenchError, Result};
