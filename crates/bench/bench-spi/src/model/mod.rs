//! Benchmark result models.

mod record;

pub use record::{BenchmarkFailure, BenchmarkRecord, BenchmarkReport};
