//! Single model evaluation.

use bench_api::Metric;
use bench_spi::{BenchmarkRecord, Forecaster, Result, TimeSeries};
use series_core::{mae, mape, rmse, train_test_split};
use tracing::debug;

use crate::dataset::Dataset;

/// Compute `metric` between an observed and a predicted series.
pub fn compute_metric(metric: Metric, actual: &TimeSeries, predicted: &TimeSeries) -> Result<f64> {
    let value = match metric {
        Metric::Mae => mae(actual, predicted)?,
        Metric::Rmse => rmse(actual, predicted)?,
        Metric::Mape => mape(actual, predicted)?,
    };
    Ok(value)
}

/// Fit `model` on the first `split` of the dataset and score its forecast of
/// the remainder.
///
/// The forecast is placed on the test index step by step, so calendar-spaced
/// data (months, business days) is compared position for position.
pub fn evaluate_model(
    model: &mut dyn Forecaster,
    dataset: &Dataset,
    split: f64,
    metric: Metric,
) -> Result<BenchmarkRecord> {
    let (train, test) = train_test_split(&dataset.series, split)?;
    debug!(
        dataset = %dataset.name,
        model = model.name(),
        train = train.len(),
        test = test.len(),
        "fitting"
    );

    model.fit(&train)?;
    let predicted = model
        .predict(test.len())?
        .with_times(test.times().to_vec())?;
    let value = compute_metric(metric, &test, &predicted)?;

    Ok(BenchmarkRecord::new(
        dataset.name.clone(),
        model.name(),
        metric.name(),
        value,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinearTrend, NaiveMean};

    #[test]
    fn test_linear_data_has_zero_trend_error() {
        let series = TimeSeries::from_values((0..20).map(|i| 3.0 + 0.5 * i as f64).collect())
            .unwrap();
        let dataset = Dataset::new("line", series);

        let record = evaluate_model(&mut LinearTrend::new(), &dataset, 0.75, Metric::Mae).unwrap();
        assert_eq!(record.dataset, "line");
        assert_eq!(record.model, "LinearTrend");
        assert_eq!(record.metric, "mae");
        assert!(record.value < 1e-9);
    }

    #[test]
    fn test_mean_model_error() {
        let dataset = Dataset::new(
            "steps",
            TimeSeries::from_values(vec![1.0, 1.0, 1.0, 1.0, 3.0]).unwrap(),
        );
        let record = evaluate_model(&mut NaiveMean::new(), &dataset, 0.8, Metric::Rmse).unwrap();
        assert!((record.value - 2.0).abs() < 1e-12);
    }

    /// Unix seconds at midnight UTC on the first of each month from 2000-01.
    fn month_starts(n: usize) -> Vec<i64> {
        const DAYS: [i64; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        let mut t = 946_684_800;
        (0..n)
            .map(|i| {
                let start = t;
                t += DAYS[i % 12] * 86_400;
                start
            })
            .collect()
    }

    #[test]
    fn test_month_start_index_evaluates() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
        let dataset = Dataset::new(
            "monthly",
            TimeSeries::from_times_and_values(month_starts(12), values).unwrap(),
        );

        let mean = evaluate_model(&mut NaiveMean::new(), &dataset, 0.75, Metric::Mae).unwrap();
        // Train mean 5.0 against test 10, 11, 12
        assert!((mean.value - 6.0).abs() < 1e-12);

        let trend = evaluate_model(&mut LinearTrend::new(), &dataset, 0.75, Metric::Mae).unwrap();
        assert!(trend.value < 1e-9);
    }

    /// Forecaster that returns one step too few.
    struct Short;

    impl Forecaster for Short {
        fn name(&self) -> &str {
            "Short"
        }

        fn fit(&mut self, _series: &TimeSeries) -> Result<()> {
            Ok(())
        }

        fn predict(&self, horizon: usize) -> Result<TimeSeries> {
            Ok(TimeSeries::from_values(vec![0.0; horizon - 1])?)
        }

        fn is_fitted(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_wrong_forecast_length_rejected() {
        let dataset = Dataset::new(
            "line",
            TimeSeries::from_values((0..10).map(f64::from).collect()).unwrap(),
        );
        assert!(evaluate_model(&mut Short, &dataset, 0.7, Metric::Mae).is_err());
    }

    #[test]
    fn test_bad_split_propagates() {
        let dataset = Dataset::new("tiny", TimeSeries::from_values(vec![1.0, 2.0]).unwrap());
        assert!(evaluate_model(&mut NaiveMean::new(), &dataset, 0.1, Metric::Mae).is_err());
    }
}
