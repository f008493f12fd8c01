//! Forecaster construction from configuration.

use bench_api::ModelConfig;
use bench_spi::{Forecaster, Result};

use crate::models::{LinearTrend, NaiveDrift, NaiveMean, NaiveSeasonal, SimpleExponentialSmoothing};

/// Build an unfitted forecaster from its configuration.
pub fn build_model(config: &ModelConfig) -> Result<Box<dyn Forecaster>> {
    let model: Box<dyn Forecaster> = match *config {
        ModelConfig::NaiveSeasonal { k } => Box::new(NaiveSeasonal::new(k)?),
        ModelConfig::NaiveMean => Box::new(NaiveMean::new()),
        ModelConfig::NaiveDrift => Box::new(NaiveDrift::new()),
        ModelConfig::LinearTrend => Box::new(LinearTrend::new()),
        ModelConfig::ExponentialSmoothing { alpha } => {
            Box::new(SimpleExponentialSmoothing::new(alpha)?)
        }
    };
    Ok(model)
}
