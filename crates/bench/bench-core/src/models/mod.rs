//! Baseline forecasters
//!
//! Every model forecasts each component of the training series on its own and
//! returns a series indexed past the end of the training index.
//!
//! - [`NaiveSeasonal`]: repeat the last `k` observations
//! - [`NaiveMean`]: the training mean
//! - [`NaiveDrift`]: the line through the first and last observations
//! - [`LinearTrend`]: least-squares trend over the step index
//! - [`SimpleExponentialSmoothing`]: flat forecast from the smoothed level

mod exponential_smoothing;
mod linear_trend;
mod naive;

pub use exponential_smoothing::SimpleExponentialSmoothing;
pub use linear_trend::{LinearTrend, TrendLine};
pub use naive::{NaiveDrift, NaiveMean, NaiveSeasonal};

use bench_spi::{BenchError, Result, TimeSeries};

/// Index and component names of the training series.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrainingShape {
    last_time: i64,
    step: i64,
    components: Vec<String>,
}

impl TrainingShape {
    pub(crate) fn of(series: &TimeSeries) -> Self {
        let times = series.times();
        Self {
            last_time: times[times.len() - 1],
            step: series.time_step(),
            components: series.components().to_vec(),
        }
    }

    /// Assemble a forecast from one column per training component.
    pub(crate) fn forecast(&self, horizon: usize, columns: Vec<Vec<f64>>) -> Result<TimeSeries> {
        if horizon == 0 {
            return Err(BenchError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let times = (1..=horizon as i64)
            .map(|i| self.last_time + self.step * i)
            .collect();
        Ok(TimeSeries::from_columns(
            times,
            self.components.clone(),
            columns,
        )?)
    }
}

/// Deterministic per-component columns, averaging stochastic samples.
pub(crate) fn training_columns(series: &TimeSeries, required: usize) -> Result<Vec<Vec<f64>>> {
    if series.len() < required {
        return Err(BenchError::InsufficientData {
            required,
            actual: series.len(),
        });
    }
    Ok(series.mean_over_samples().columns())
}
