//! Integration tests for the benchmark facade

use std::fs;
use std::path::Path;

use bench_facade::{
    run_benchmark, BenchError, BenchmarkConfig, BenchmarkReport, BenchmarkRunner, Dataset,
    FailurePolicy, Forecaster, ModelConfig, Result, TimeSeries,
};

/// Monthly series with a yearly cycle on top of a slow trend.
fn write_monthly(dir: &Path, name: &str, months: usize) {
    let mut body = String::from("Month,Passengers,Noise\n");
    for i in 0..months {
        let year = 2000 + i / 12;
        let month = i % 12 + 1;
        let value = 100.0 + i as f64 + [0.0, 5.0, 10.0, 5.0][i % 4];
        body.push_str(&format!("{}-{:02}-01,{},{}\n", year, month, value, i % 3));
    }
    fs::write(dir.join(name), body).unwrap();
}

fn write_config(dir: &Path, policy: &str) -> std::path::PathBuf {
    let text = format!(
        r#"
split = 0.75
metric = "mae"
failure_policy = "{}"

[[dataset]]
name = "AirPassengers"
path = "air.csv"
time_column = "Month"
target = ["Passengers"]

[[dataset]]
name = "Short"
path = "short.csv"
time_column = "Month"
target = ["Passengers"]

[[model]]
kind = "naive_mean"

[[model]]
kind = "naive_seasonal"
k = 12

[[model]]
kind = "linear_trend"
"#,
        policy
    );
    let path = dir.join("bench.toml");
    fs::write(&path, text).unwrap();
    path
}

fn setup(policy: &str) -> (tempfile::TempDir, BenchmarkConfig) {
    let dir = tempfile::tempdir().unwrap();
    write_monthly(dir.path(), "air.csv", 48);
    write_monthly(dir.path(), "short.csv", 16);
    let config = BenchmarkConfig::load(write_config(dir.path(), policy)).unwrap();
    (dir, config)
}

#[test]
fn test_full_run_from_toml() {
    let (_dir, config) = setup("abort");
    let report = run_benchmark(&config).unwrap();

    // Short keeps 12 training steps, exactly one season
    assert!(report.is_complete());
    assert_eq!(report.records.len(), 6);
    assert_eq!(report.tuples()[0].0, "AirPassengers");
    assert_eq!(report.tuples()[0].1, "NaiveMean");
}

#[test]
fn test_abort_stops_at_first_failure() {
    let (_dir, mut config) = setup("abort");
    config.models[1] = ModelConfig::NaiveSeasonal { k: 24 };

    let report = run_benchmark(&config).unwrap();

    // AirPassengers runs all three; Short fails on the seasonal model
    assert!(report.aborted);
    assert_eq!(report.records.len(), 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].dataset, "Short");
    assert_eq!(report.failures[0].model, "NaiveSeasonal");
    assert!(report.failures[0].error.contains("Insufficient data"));
}

#[test]
fn test_skip_evaluates_remaining_pairs() {
    let (_dir, mut config) = setup("skip");
    config.models[1] = ModelConfig::NaiveSeasonal { k: 24 };

    let report = run_benchmark(&config).unwrap();

    assert!(!report.aborted);
    assert_eq!(report.records.len(), 5);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.records.last().unwrap().model, "LinearTrend");
}

#[test]
fn test_missing_dataset_file_is_an_error() {
    let (dir, config) = setup("abort");
    fs::remove_file(dir.path().join("short.csv")).unwrap();

    let err = run_benchmark(&config).unwrap_err();
    assert!(matches!(err, BenchError::Dataset { ref name, .. } if name == "Short"));
}

#[test]
fn test_trend_models_beat_the_mean() {
    let (_dir, config) = setup("abort");
    let report = run_benchmark(&config).unwrap();

    let best = report.best_for("AirPassengers").unwrap();
    assert_ne!(best.model, "NaiveMean");
}

#[test]
fn test_report_as_json() {
    let (_dir, config) = setup("abort");
    let report = run_benchmark(&config).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let back: BenchmarkReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

/// Forecaster that always predicts a constant.
struct Constant(f64, Option<TimeSeries>);

impl Forecaster for Constant {
    fn name(&self) -> &str {
        "Constant"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.1 = Some(series.clone());
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let train = self.1.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = vec![vec![self.0; horizon]; train.n_components()];
        Ok(TimeSeries::from_columns(
            train.future_times(horizon),
            train.components().to_vec(),
            columns,
        )?)
    }

    fn is_fitted(&self) -> bool {
        self.1.is_some()
    }
}

#[test]
fn test_external_forecaster_plugs_in() {
    let dataset = Dataset::new(
        "flat",
        TimeSeries::from_values(vec![4.0; 10]).unwrap(),
    );

    let report = BenchmarkRunner::new()
        .with_failure_policy(FailurePolicy::Skip)
        .with_forecaster("Constant", || Ok(Box::new(Constant(4.0, None)) as Box<dyn Forecaster>))
        .with_model(ModelConfig::NaiveDrift)
        .run(&[dataset]);

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].model, "Constant");
    assert_eq!(report.records[0].value, 0.0);
    assert_eq!(report.to_string(), r#"[("flat", "Constant", 0), ("flat", "NaiveDrift", 0)]"#);
}
