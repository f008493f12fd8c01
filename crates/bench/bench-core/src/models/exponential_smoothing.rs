//! Simple exponential smoothing baseline.

use bench_spi::{BenchError, Forecaster, Result, TimeSeries};

use super::{training_columns, TrainingShape};

/// Simple exponential smoothing with a fixed smoothing factor.
///
/// Formula: `S_t = α * Y_t + (1 - α) * S_{t-1}`, seeded with the first
/// observation. The forecast repeats the final level.
#[derive(Debug, Clone)]
pub struct SimpleExponentialSmoothing {
    alpha: f64,
    levels: Vec<f64>,
    shape: Option<TrainingShape>,
}

impl SimpleExponentialSmoothing {
    /// `alpha` must be in `(0, 1]`. With `alpha = 1` the level is the last value.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(BenchError::InvalidParameter {
                name: "alpha".to_string(),
                reason: format!("must be in (0, 1], got {}", alpha),
            });
        }

        Ok(Self {
            alpha,
            levels: Vec::new(),
            shape: None,
        })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Final smoothed level per component.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }
}

impl Forecaster for SimpleExponentialSmoothing {
    fn name(&self) -> &str {
        "ExponentialSmoothing"
    }

    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        let alpha = self.alpha;
        self.levels = training_columns(series, 2)?
            .iter()
            .map(|column| {
                column[1..]
                    .iter()
                    .fold(column[0], |level, &value| alpha * value + (1.0 - alpha) * level)
            })
            .collect();
        self.shape = Some(TrainingShape::of(series));
        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<TimeSeries> {
        let shape = self.shape.as_ref().ok_or(BenchError::NotFitted)?;
        let columns = self.levels.iter().map(|&l| vec![l; horizon]).collect();
        shape.forecast(horizon, columns)
    }

    fn is_fitted(&self) -> bool {
        self.shape.is_some()
    }
}
