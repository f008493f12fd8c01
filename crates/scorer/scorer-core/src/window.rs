//! Trailing window aggregation of raw scores.

use scorer_spi::{Result, ScorerError, TimeSeries};

/// Replace each score with the mean of the trailing `window` scores.
///
/// The first `window - 1` time steps have no full window and are dropped, so
/// the output starts at the `window`-th time step of the input. Stochastic
/// scores are reduced to their sample mean first.
pub fn trailing_window_mean(scores: &TimeSeries, window: usize) -> Result<TimeSeries> {
    if window == 0 {
        return Err(ScorerError::InvalidParameter {
            name: "window".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if window == 1 {
        return Ok(scores.mean_over_samples());
    }
    if scores.len() < window {
        return Err(ScorerError::InvalidParameter {
            name: "window".to_string(),
            reason: format!(
                "series of length {} is shorter than window {}",
                scores.len(),
                window
            ),
        });
    }

    let n = window as f64;
    let columns = scores
        .mean_over_samples()
        .columns()
        .into_iter()
        .map(|column| {
            let mut sum: f64 = column[..window].iter().sum();
            let mut means = Vec::with_capacity(column.len() - window + 1);
            means.push(sum / n);
            for i in window..column.len() {
                sum += column[i] - column[i - window];
                means.push(sum / n);
            }
            means
        })
        .collect();

    Ok(TimeSeries::from_columns(
        scores.times()[window - 1..].to_vec(),
        scores.components().to_vec(),
        columns,
    )?)
}
