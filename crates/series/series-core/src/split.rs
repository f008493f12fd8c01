//! Chronological train/test splitting.

use series_spi::{Result, SeriesError, TimeSeries};

/// Split a series in time order, keeping the first `train_fraction` of the
/// steps for training and the remainder for testing.
///
/// Both parts must be non-empty.
pub fn train_test_split(
    series: &TimeSeries,
    train_fraction: f64,
) -> Result<(TimeSeries, TimeSeries)> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SeriesError::InvalidParameter {
            name: "train_fraction".to_string(),
            reason: format!("must be in (0, 1), got {}", train_fraction),
        });
    }

    let len = series.len();
    let split_idx = (train_fraction * len as f64) as usize;
    if split_idx == 0 || split_idx >= len {
        return Err(SeriesError::InvalidParameter {
            name: "train_fraction".to_string(),
            reason: format!(
                "{} of {} steps leaves an empty train or test part",
                train_fraction, len
            ),
        });
    }

    Ok((series.slice(0..split_idx)?, series.slice(split_idx..len)?))
}
