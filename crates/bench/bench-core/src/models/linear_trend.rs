//! Linear trend baseline
//!
//! Fits `y = intercept + slope * t` per component by ordinary least squares,
//! where `t` is the step position `0, 1, 2, ...` in the training series.

use bench_spi::{BenchError, Forecaster, Result, TimeSeries};

use super::{training_columns, TrainingShape};

/// Least-squares coefficients for one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub intercept: f64,
    pub slope: f64,
}

impl TrendLine {
    fn fit(data: &[f64]) -> Result<Self> {
        let n = data.len() as f64;
        let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
        let sum_y: f64 = data.iter().sum();
        let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        let denominator = n * sum_t2 - sum_t * sum_t;
        if denominator.abs() < 1e-10 {
            return Err(BenchError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let slope = (n * sum_ty - sum_t * sum_y) / denominator;
        Ok(Self {
            intercept: (sum_y - slope * sum_t) / n,
            slope,
        })
    }

    pub fn at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Ordinary least squares trend over the step index.
#[derive(Debug, Clone, Default)]
pub struct LinearTrend {
    lines: Vec<TrendLine>,
    n_observations: usize,
    shape: Option<TrainingShape>,
}

impl LinearTrend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted trend per component, in component order.
    pub fn lines(&self) -> &[TrendLine] {
        &self.lines
    }
}

impl Forecaster for LinearTrend {
    fn name(&self) -> &str {
        "LinearTrend"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.lines = training_columns(series, 2)?
            .iter()
            .map(|column| TrendLine::fit(column))
            .collect::<Result<Vec<_>>>()?;
        self.n_observations = series.len();
        self.shape = Some(TrainingShape::of(series));
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let shape = self.shape.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = self
            .lines
            .iter()
            .map(|line| {
                (0..horizon)
                    .map(|i| line.at((self.n_observations + i) as f64))
                    .collect()
            })
            .collect();
        shape.forecast(horizon, columns)
    }

    fn is_fitted(&self) -> bool {
        self.shape.is_some()
    }
}
