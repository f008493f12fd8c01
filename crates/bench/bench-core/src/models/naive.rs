//! Naive baselines.

use bench_spi::{BenchError, Forecaster, Result, TimeSeries};

use super::{training_columns, TrainingShape};

/// Repeats the last `k` observations of each component.
///
/// With `k = 1` this is the plain last-value forecast.
#[derive(Debug, Clone)]
pub struct NaiveSeasonal {
    k: usize,
    tails: Vec<Vec<f64>>,
    shape: Option<TrainingShape>,
}

impl NaiveSeasonal {
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(BenchError::InvalidParameter {
                name: "k".to_string(),
                reason: "season length must be at least 1".to_string(),
            });
        }
        Ok(Self {
            k,
            tails: Vec::new(),
            shape: None,
        })
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl Forecaster for NaiveSeasonal {
    fn name(&self) -> &str {
        "NaiveSeasonal"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let columns = training_columns(series, self.k)?;
        self.tails = columns
            .into_iter()
            .map(|column| column[column.len() - self.k..].to_vec())
            .collect();
        self.shape = Some(TrainingShape::of(series));
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let shape = self.shape.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = self
            .tails
            .iter()
            .map(|tail| (0..horizon).map(|i| tail[i % self.k]).collect())
            .collect();
        shape.forecast(horizon, columns)
    }

    fn is_fitted(&self) -> bool {
        self.shape.is_some()
    }
}

/// Predicts the mean of each training component.
#[derive(Debug, Clone, Default)]
pub struct NaiveMean {
    means: Vec<f64>,
    shape: Option<TrainingShape>,
}

impl NaiveMean {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for NaiveMean {
    fn name(&self) -> &str {
        "NaiveMean"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.means = training_columns(series, 1)?
            .iter()
            .map(|column| column.iter().sum::<f64>() / column.len() as f64)
            .collect();
        self.shape = Some(TrainingShape::of(series));
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let shape = self.shape.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = self.means.iter().map(|&m| vec![m; horizon]).collect();
        shape.forecast(horizon, columns)
    }

    fn is_fitted(&self) -> bool {
        self.shape.is_some()
    }
}

/// Extends the line through the first and last training observations.
#[derive(Debug, Clone, Default)]
pub struct NaiveDrift {
    // (last value, slope per step)
    lines: Vec<(f64, f64)>,
    shape: Option<TrainingShape>,
}

impl NaiveDrift {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Forecaster for NaiveDrift {
    fn name(&self) -> &str {
        "NaiveDrift"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        self.lines = training_columns(series, 2)?
            .iter()
            .map(|column| {
                let first = column[0];
                let last = column[column.len() - 1];
                (last, (last - first) / (column.len() - 1) as f64)
            })
            .collect();
        self.shape = Some(TrainingShape::of(series));
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let shape = self.shape.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = self
            .lines
            .iter()
            .map(|&(last, slope)| (1..=horizon).map(|h| last + slope * h as f64).collect())
            .collect();
        shape.forecast(horizon, columns)
    }

    fn is_fitted(&self) -> bool {
        self.shape.is_some()
    }
}
