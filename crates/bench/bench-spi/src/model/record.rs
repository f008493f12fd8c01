//! Benchmark result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Metric value obtained by one model on one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub dataset: String,
    pub model: String,
    /// Name of the error metric, e.g. `"mae"`.
    pub metric: String,
    pub value: f64,
}

impl BenchmarkRecord {
    pub fn new(
        dataset: impl Into<String>,
        model: impl Into<String>,
        metric: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            model: model.into(),
            metric: metric.into(),
            value,
        }
    }

    /// Format the record as a table row.
    pub fn as_row(&self) -> String {
        format!(
            "{:20} {:28} {:>6} {:>14.6}",
            self.dataset, self.model, self.metric, self.value
        )
    }
}

/// A dataset/model pair that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkFailure {
    pub dataset: String,
    pub model: String,
    pub error: String,
}

/// Outcome of a benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Successful evaluations in run order.
    pub records: Vec<BenchmarkRecord>,
    /// Failed evaluations in run order.
    pub failures: Vec<BenchmarkFailure>,
    /// Whether the run stopped early on a failure.
    pub aborted: bool,
}

impl BenchmarkReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(dataset, model, value)` tuples in run order.
    pub fn tuples(&self) -> Vec<(String, String, f64)> {
        self.records
            .iter()
            .map(|r| (r.dataset.clone(), r.model.clone(), r.value))
            .collect()
    }

    /// Whether every dataset/model pair was evaluated.
    pub fn is_complete(&self) -> bool {
        !self.aborted && self.failures.is_empty()
    }

    /// Record with the lowest metric value for `dataset`.
    pub fn best_for(&self, dataset: &str) -> Option<&BenchmarkRecord> {
        self.records
            .iter()
            .filter(|r| r.dataset == dataset && !r.value.is_nan())
            .min_by(|a, b| a.value.total_cmp(&b.value))
    }
}

impl fmt::Display for BenchmarkReport {
    /// Prints the result tuples as a list, e.g. `[("Sunspots", "NaiveMean", 40.1)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "({:?}, {:?}, {})",
                record.dataset, record.model, record.value
            )?;
        }
        f.write_str("]")
    }
}
