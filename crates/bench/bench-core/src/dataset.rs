//! Benchmark dataset loading.

use bench_api::DatasetConfig;
use bench_spi::{BenchError, Result, TimeSeries};
use series_core::{count_missing, fill_missing_values, read_csv, CsvOptions};
use tracing::{debug, info, warn};

/// A named series the benchmark evaluates models on.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub name: String,
    pub series: TimeSeries,
}

impl Dataset {
    pub fn new(name: impl Into<String>, series: TimeSeries) -> Self {
        Self {
            name: name.into(),
            series,
        }
    }
}

/// Read a dataset's CSV file and select its target columns.
///
/// Errors are reported against the dataset name.
pub fn load_dataset(config: &DatasetConfig) -> Result<Dataset> {
    let dataset_error = |reason: String| BenchError::Dataset {
        name: config.name.clone(),
        reason,
    };

    let mut options = CsvOptions::new();
    if let Some(time_column) = &config.time_column {
        options = options.time_column(time_column.clone());
    }
    if !config.target.is_empty() {
        options = options.columns(config.target.iter().cloned());
    }

    let mut series = read_csv(&config.path, &options).map_err(|e| dataset_error(e.to_string()))?;

    let missing = count_missing(&series);
    if missing > 0 {
        if config.fill_missing {
            debug!(dataset = %config.name, missing, "interpolating missing values");
            series = fill_missing_values(&series).map_err(|e| dataset_error(e.to_string()))?;
        } else {
            warn!(
                dataset = %config.name,
                missing,
                "dataset has missing values and fill_missing is off; metrics may be NaN"
            );
        }
    }

    info!(
        dataset = %config.name,
        steps = series.len(),
        components = series.n_components(),
        "loaded dataset"
    );
    Ok(Dataset::new(config.name.clone(), series))
}

/// Load every dataset in order, stopping at the first failure.
pub fn load_datasets(configs: &[DatasetConfig]) -> Result<Vec<Dataset>> {
    configs.iter().map(load_dataset).collect()
}
