//! Time Series Core
//!
//! Operations over [`TimeSeries`] values:
//!
//! - [`io`]: CSV reading and writing
//! - [`missing`]: missing-value interpolation
//! - [`split`]: chronological train/test splitting
//! - [`metrics`]: forecast error metrics over aligned series

pub mod io;
pub mod metrics;
pub mod missing;
pub mod split;

// Re-export from SPI
pub use series_spi::{Result, SeriesError, TimeSeries};

pub use io::{parse_time, read_csv, read_csv_from_reader, write_csv, CsvOptions};
pub use metrics::{mae, mape, mse, rmse};
pub use missing::{count_missing, fill_missing_values};
pub use split::train_test_split;
