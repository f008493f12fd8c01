//! Error types for time series operations.

mod series_error;

pub use series_error::{Result, SeriesError};
