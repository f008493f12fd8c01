//! Forecast accuracy metrics
//!
//! Each metric is computed per component on aligned series and averaged over
//! components. Stochastic inputs are reduced to their sample mean first.
//! Lower is better for every metric here.

use series_spi::{Result, TimeSeries};

fn per_component<F>(actual: &TimeSeries, predicted: &TimeSeries, metric: F) -> Result<f64>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    actual.check_aligned(predicted)?;
    let actual = actual.mean_over_samples();
    let predicted = predicted.mean_over_samples();

    let scores: Vec<f64> = actual
        .columns()
        .iter()
        .zip(predicted.columns().iter())
        .map(|(a, p)| metric(a, p))
        .collect();

    Ok(scores.iter().sum::<f64>() / scores.len() as f64)
}

fn mae_values(actual: &[f64], predicted: &[f64]) -> f64 {
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();
    sum / actual.len() as f64
}

fn mse_values(actual: &[f64], predicted: &[f64]) -> f64 {
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();
    sum / actual.len() as f64
}

fn mape_values(actual: &[f64], predicted: &[f64]) -> f64 {
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .filter(|(a, _)| a.abs() > 1e-10)
        .map(|(a, p)| ((a - p) / a).abs())
        .sum();
    sum / actual.len() as f64
}

/// Mean Absolute Error (MAE)
///
/// Same scale as the data.
///
/// # Example
///
/// ```rust
/// use series_core::{mae, TimeSeries};
///
/// let actual = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
/// let predicted = TimeSeries::from_values(vec![1.5, 2.0, 2.0]).unwrap();
/// assert_eq!(mae(&actual, &predicted).unwrap(), 0.5);
/// ```
pub fn mae(actual: &TimeSeries, predicted: &TimeSeries) -> Result<f64> {
    per_component(actual, predicted, mae_values)
}

/// Mean Squared Error (MSE)
pub fn mse(actual: &TimeSeries, predicted: &TimeSeries) -> Result<f64> {
    per_component(actual, predicted, mse_values)
}

/// Root Mean Squared Error (RMSE), averaged over per-component RMSE values.
pub fn rmse(actual: &TimeSeries, predicted: &TimeSeries) -> Result<f64> {
    per_component(actual, predicted, |a, p| mse_values(a, p).sqrt())
}

/// Mean Absolute Percentage Error (MAPE) as a fraction, not a percentage.
///
/// Points where the actual value is zero contribute nothing.
pub fn mape(actual: &TimeSeries, predicted: &TimeSeries) -> Result<f64> {
    per_component(actual, predicted, mape_values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (TimeSeries, TimeSeries) {
        let actual = TimeSeries::new(
            vec![0, 1],
            vec!["a".to_string(), "b".to_string()],
            vec![vec![1.0, 10.0], vec![2.0, 20.0]],
        )
        .unwrap();
        let predicted = TimeSeries::new(
            vec![0, 1],
            vec!["a".to_string(), "b".to_string()],
            vec![vec![2.0, 10.0], vec![2.0, 16.0]],
        )
        .unwrap();
        (actual, predicted)
    }

    #[test]
    fn test_mae_averages_components() {
        let (actual, predicted) = pair();
        // a: (1 + 0) / 2 = 0.5, b: (0 + 4) / 2 = 2.0
        assert!((mae(&actual, &predicted).unwrap() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_mse_and_rmse() {
        let (actual, predicted) = pair();
        // a: 0.5, b: 8.0
        assert!((mse(&actual, &predicted).unwrap() - 4.25).abs() < 1e-12);
        let expected_rmse = (0.5f64.sqrt() + 8.0f64.sqrt()) / 2.0;
        assert!((rmse(&actual, &predicted).unwrap() - expected_rmse).abs() < 1e-12);
    }

    #[test]
    fn test_mape() {
        let (actual, predicted) = pair();
        // a: (1.0 + 0) / 2 = 0.5, b: (0 + 0.2) / 2 = 0.1
        assert!((mape(&actual, &predicted).unwrap() - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_forecast_is_zero() {
        let (actual, _) = pair();
        assert_eq!(mae(&actual, &actual).unwrap(), 0.0);
        assert_eq!(rmse(&actual, &actual).unwrap(), 0.0);
    }

    #[test]
    fn test_misaligned_inputs_fail() {
        let (actual, _) = pair();
        let short = actual.slice(0..1).unwrap();
        assert!(mae(&actual, &short).is_err());
    }
}
