//! Missing-value handling.

use series_spi::{Result, SeriesError, TimeSeries};
use tracing::debug;

/// Number of `NaN` cells across all components and samples.
pub fn count_missing(series: &TimeSeries) -> usize {
    series.values().iter().filter(|v| v.is_nan()).count()
}

/// Fill `NaN` gaps by linear interpolation over index positions.
///
/// Leading and trailing gaps take the nearest observed value. A component
/// with no observed value at all cannot be filled and is reported as an error.
pub fn fill_missing_values(series: &TimeSeries) -> Result<TimeSeries> {
    let missing = count_missing(series);
    if missing == 0 {
        return Ok(series.clone());
    }

    let (len, width, n_samples) = series.shape();
    let mut values = series.values().to_vec();
    let stride = width * n_samples;

    for c in 0..width {
        for s in 0..n_samples {
            let lane: Vec<usize> = (0..len).map(|t| t * stride + c * n_samples + s).collect();
            let mut column: Vec<f64> = lane.iter().map(|&i| values[i]).collect();

            if column.iter().all(|v| v.is_nan()) {
                return Err(SeriesError::InvalidParameter {
                    name: series.components()[c].clone(),
                    reason: "component has no observed values to interpolate from".to_string(),
                });
            }

            interpolate_linear(&mut column);
            for (&i, v) in lane.iter().zip(column) {
                values[i] = v;
            }
        }
    }

    debug!(filled = missing, "filled missing values");
    TimeSeries::with_samples(
        series.times().to_vec(),
        series.components().to_vec(),
        n_samples,
        values,
    )
}

fn interpolate_linear(data: &mut [f64]) {
    let n = data.len();
    let mut i = 0;
    while i < n {
        if !data[i].is_nan() {
            i += 1;
            continue;
        }

        // Gap covers [i, end)
        let end = (i..n).find(|&j| !data[j].is_nan()).unwrap_or(n);
        let prev = i.checked_sub(1);
        let next = (end < n).then_some(end);

        for j in i..end {
            data[j] = match (prev, next) {
                (Some(p), Some(q)) => {
                    let ratio = (j - p) as f64 / (q - p) as f64;
                    data[p] + ratio * (data[q] - data[p])
                }
                (Some(p), None) => data[p],
                (None, Some(q)) => data[q],
                (None, None) => f64::NAN,
            };
        }
        i = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_gap_interpolated() {
        let series = TimeSeries::from_values(vec![1.0, f64::NAN, f64::NAN, 4.0]).unwrap();
        let filled = fill_missing_values(&series).unwrap();
        assert_eq!(filled.component_values(0), Some(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn test_edges_take_nearest() {
        let series = TimeSeries::from_values(vec![f64::NAN, 2.0, 5.0, f64::NAN]).unwrap();
        let filled = fill_missing_values(&series).unwrap();
        assert_eq!(filled.component_values(0), Some(vec![2.0, 2.0, 5.0, 5.0]));
        assert_eq!(count_missing(&filled), 0);
    }

    #[test]
    fn test_components_filled_independently() {
        let series = TimeSeries::new(
            vec![0, 1, 2],
            vec!["a".to_string(), "b".to_string()],
            vec![vec![0.0, f64::NAN], vec![f64::NAN, 10.0], vec![2.0, 30.0]],
        )
        .unwrap();
        let filled = fill_missing_values(&series).unwrap();
        assert_eq!(filled.component_values(0), Some(vec![0.0, 1.0, 2.0]));
        assert_eq!(filled.component_values(1), Some(vec![10.0, 10.0, 30.0]));
    }

    #[test]
    fn test_all_missing_component_fails() {
        let series = TimeSeries::from_values(vec![f64::NAN, f64::NAN]).unwrap();
        assert!(matches!(
            fill_missing_values(&series),
            Err(SeriesError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_long_gaps_filled_in_one_pass() {
        let mut values = vec![0.0];
        values.extend(std::iter::repeat(f64::NAN).take(999));
        values.push(1000.0);
        values.extend([f64::NAN, f64::NAN, 4000.0, f64::NAN]);
        let series = TimeSeries::from_values(values).unwrap();

        let filled = fill_missing_values(&series).unwrap().component_values(0).unwrap();
        for (i, v) in filled[..=1000].iter().enumerate() {
            assert!((v - i as f64).abs() < 1e-9);
        }
        assert!((filled[1001] - 2000.0).abs() < 1e-9);
        assert!((filled[1002] - 3000.0).abs() < 1e-9);
        assert_eq!(filled[1003], 4000.0);
        assert_eq!(filled[1004], 4000.0);
    }

    #[test]
    fn test_complete_series_unchanged() {
        let series = TimeSeries::from_values(vec![1.0, 2.0]).unwrap();
        assert_eq!(fill_missing_values(&series).unwrap(), series);
    }
}
