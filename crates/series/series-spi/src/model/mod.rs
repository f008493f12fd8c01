//! Data models for time series.

mod time_series;

pub use time_series::TimeSeries;
