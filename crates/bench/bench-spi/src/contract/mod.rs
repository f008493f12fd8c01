//! Contract definitions for forecasting models.

mod forecaster;

pub use forecaster::Forecaster;
