//! Benchmark runner
//!
//! Evaluates every registered model on every dataset, in order, and collects
//! one [`BenchmarkRecord`] per successful evaluation. What happens on a failed
//! evaluation is decided by the [`FailurePolicy`].

use bench_api::{BenchmarkConfig, FailurePolicy, Metric, ModelConfig};
use bench_spi::{BenchmarkFailure, BenchmarkReport, Forecaster, Result};
use tracing::{error, info, warn};

use crate::dataset::{load_datasets, Dataset};
use crate::evaluate::evaluate_model;
use crate::registry::build_model;

type ModelFactory = Box<dyn Fn() -> Result<Box<dyn Forecaster>> + Send + Sync>;

struct ModelEntry {
    name: String,
    factory: ModelFactory,
}

/// Sequential dataset × model evaluation.
///
/// A fresh forecaster is built for every dataset, so no state leaks between
/// evaluations.
///
/// # Example
///
/// ```rust,ignore
/// let report = BenchmarkRunner::new()
///     .with_model(ModelConfig::NaiveMean)
///     .with_model(ModelConfig::NaiveSeasonal { k: 12 })
///     .run(&datasets);
/// println!("{}", report);
/// ```
pub struct BenchmarkRunner {
    models: Vec<ModelEntry>,
    split: f64,
    metric: Metric,
    failure_policy: FailurePolicy,
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        let config = BenchmarkConfig::default();
        Self {
            models: Vec::new(),
            split: config.split,
            metric: config.metric,
            failure_policy: config.failure_policy,
        }
    }
}

impl BenchmarkRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner with the models and settings of `config`.
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        config.models.iter().fold(
            Self::new()
                .with_split(config.split)
                .with_metric(config.metric)
                .with_failure_policy(config.failure_policy),
            |runner, &model| runner.with_model(model),
        )
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

    /// Register one of the built-in baselines.
    pub fn with_model(self, config: ModelConfig) -> Self {
        self.with_forecaster(config.name(), move || build_model(&config))
    }

    /// Register any forecaster by name and constructor.
    pub fn with_forecaster<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Box<dyn Forecaster>> + Send + Sync + 'static,
    {
        self.models.push(ModelEntry {
            name: name.into(),
            factory: Box::new(factory),
        });
        self
    }

    /// Names of the registered models, in evaluation order.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }

    /// Evaluate every model on every dataset.
    ///
    /// Under [`FailurePolicy::Abort`] the first failure ends the run and the
    /// records gathered so far are returned with `aborted` set.
    pub fn run(&self, datasets: &[Dataset]) -> BenchmarkReport {
        let mut report = BenchmarkReport::new();
        info!(
            datasets = datasets.len(),
            models = self.models.len(),
            metric = %self.metric,
            "starting benchmark"
        );

        'datasets: for dataset in datasets {
            for entry in &self.models {
                let outcome = (entry.factory)().and_then(|mut model| {
                    evaluate_model(model.as_mut(), dataset, self.split, self.metric)
                });

                match outcome {
                    Ok(record) => {
                        info!(
                            dataset = %record.dataset,
                            model = %record.model,
                            value = record.value,
                            "{}",
                            record.as_row()
                        );
                        report.records.push(record);
                    }
                    Err(e) => {
                        report.failures.push(BenchmarkFailure {
                            dataset: dataset.name.clone(),
                            model: entry.name.clone(),
                            error: e.to_string(),
                        });
                        match self.failure_policy {
                            FailurePolicy::Abort => {
                                error!(
                                    dataset = %dataset.name,
                                    model = %entry.name,
                                    "evaluation failed, aborting benchmark: {}",
                                    e
                                );
                                report.aborted = true;
                                break 'datasets;
                            }
                            FailurePolicy::Skip => {
                                warn!(
                                    dataset = %dataset.name,
                                    model = %entry.name,
                                    "evaluation failed, skipping: {}",
                                    e
                                );
                            }
                        }
                    }
                }
            }
        }

        info!(
            records = report.records.len(),
            failures = report.failures.len(),
            aborted = report.aborted,
            "benchmark finished"
        );
        report
    }
}

/// Validate `config`, load its datasets and run every configured model.
///
/// Dataset loading failures are returned as errors; evaluation failures are
/// handled by the configured [`FailurePolicy`].
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;
    let datasets = load_datasets(&config.datasets)?;
    Ok(BenchmarkRunner::from_config(config).run(&datasets))
}
