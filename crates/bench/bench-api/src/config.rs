//! Benchmark configuration types.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use bench_spi::{BenchError, Result};
use serde::{Deserialize, Serialize};

/// Error metric reported for each evaluation (lower is better).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Mae,
    Rmse,
    Mape,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mae => "mae",
            Metric::Rmse => "rmse",
            Metric::Mape => "mape",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mae" => Ok(Metric::Mae),
            "rmse" => Ok(Metric::Rmse),
            "mape" => Ok(Metric::Mape),
            other => Err(BenchError::Config(format!("unknown metric '{}'", other))),
        }
    }
}

/// What the runner does when one dataset/model pair fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure and keep the results gathered so far.
    #[default]
    Abort,
    /// Record the failure and continue with the next pair.
    Skip,
}

/// A dataset loaded from a CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Name used in reports.
    pub name: String,
    /// CSV file with a header row.
    pub path: PathBuf,
    /// Timestamp column. Rows get a range index when absent.
    #[serde(default)]
    pub time_column: Option<String>,
    /// Target columns. Every non-time column when empty.
    #[serde(default)]
    pub target: Vec<String>,
    /// Interpolate missing values after loading.
    #[serde(default)]
    pub fill_missing: bool,
}

impl DatasetConfig {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            time_column: None,
            target: Vec::new(),
            fill_missing: false,
        }
    }

    pub fn time_column(mut self, column: impl Into<String>) -> Self {
        self.time_column = Some(column.into());
        self
    }

    pub fn target<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn fill_missing(mut self, fill: bool) -> Self {
        self.fill_missing = fill;
        self
    }
}

fn default_k() -> usize {
    1
}

fn default_alpha() -> f64 {
    0.3
}

fn default_split() -> f64 {
    0.8
}

/// Which forecaster to evaluate, with its fixed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    /// Repeats the last `k` observations.
    NaiveSeasonal {
        #[serde(default = "default_k")]
        k: usize,
    },
    /// Predicts the training mean.
    NaiveMean,
    /// Extends the line through the first and last observations.
    NaiveDrift,
    /// Least-squares linear trend over the step index.
    LinearTrend,
    /// Simple exponential smoothing.
    ExponentialSmoothing {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
}

impl ModelConfig {
    /// Model name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            ModelConfig::NaiveSeasonal { .. } => "NaiveSeasonal",
            ModelConfig::NaiveMean => "NaiveMean",
            ModelConfig::NaiveDrift => "NaiveDrift",
            ModelConfig::LinearTrend => "LinearTrend",
            ModelConfig::ExponentialSmoothing { .. } => "ExponentialSmoothing",
        }
    }
}

/// Full benchmark description, usually read from a TOML file.
///
/// ```toml
/// split = 0.8
/// metric = "mae"
/// failure_policy = "abort"
///
/// [[dataset]]
/// name = "Sunspots"
/// path = "data/sunspots.csv"
/// time_column = "Month"
/// target = ["Sunspots"]
///
/// [[model]]
/// kind = "naive_seasonal"
/// k = 12
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Fraction of each dataset used for training (default: 0.8).
    #[serde(default = "default_split")]
    pub split: f64,
    #[serde(default)]
    pub metric: Metric,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default, rename = "dataset")]
    pub datasets: Vec<DatasetConfig>,
    #[serde(default, rename = "model")]
    pub models: Vec<ModelConfig>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            split: default_split(),
            metric: Metric::default(),
            failure_policy: FailurePolicy::default(),
            datasets: Vec::new(),
            models: Vec::new(),
        }
    }
}

impl BenchmarkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_split(mut self, split: f64) -> Self {
        self.split = split;
        self
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_dataset(mut self, dataset: DatasetConfig) -> Self {
        self.datasets.push(dataset);
        self
    }

    pub fn with_model(mut self, model: ModelConfig) -> Self {
        self.models.push(model);
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| BenchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// Relative dataset paths are resolved against the file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Io(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::from_toml_str(&text)?;

        if let Some(base) = path.parent() {
            for dataset in &mut config.datasets {
                if dataset.path.is_relative() {
                    dataset.path = base.join(&dataset.path);
                }
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.split > 0.0 && self.split < 1.0) {
            return Err(BenchError::Config(format!(
                "split must be in (0, 1), got {}",
                self.split
            )));
        }
        if self.datasets.is_empty() {
            return Err(BenchError::Config("no datasets configured".to_string()));
        }
        if self.models.is_empty() {
            return Err(BenchError::Config("no models configured".to_string()));
        }

        let mut names = HashSet::new();
        for dataset in &self.datasets {
            if !names.insert(dataset.name.as_str()) {
                return Err(BenchError::Config(format!(
                    "duplicate dataset name '{}'",
                    dataset.name
                )));
            }
        }
        Ok(())
    }
}
