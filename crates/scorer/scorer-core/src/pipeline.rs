//! Flag-driven scoring pipeline.
//!
//! Every entry point here reads the scorer's [`ScorerCapabilities`] and wraps
//! the core transformation accordingly. Nothing dispatches on concrete types.

use scorer_spi::{AnomalyScorer, Result, ScorerCapabilities, ScorerError, TimeSeries};
use tracing::debug;

use crate::window::trailing_window_mean;

fn ensure_deterministic<S>(scorer: &S, series: &[&TimeSeries]) -> Result<()>
where
    S: AnomalyScorer + ?Sized,
{
    if scorer.capabilities().probabilistic_support {
        return Ok(());
    }
    if series.iter().any(|s| !s.is_deterministic()) {
        return Err(ScorerError::ProbabilisticUnsupported {
            scorer: scorer.name().to_string(),
        });
    }
    Ok(())
}

fn ensure_fitted<S>(scorer: &S) -> Result<()>
where
    S: AnomalyScorer + ?Sized,
{
    if scorer.capabilities().fittable && !scorer.is_fitted() {
        return Err(ScorerError::NotFitted {
            scorer: scorer.name().to_string(),
        });
    }
    Ok(())
}

fn aggregate(capabilities: &ScorerCapabilities, scores: TimeSeries) -> Result<TimeSeries> {
    if capabilities.aggregates_window() {
        trailing_window_mean(&scores, capabilities.window)
    } else {
        Ok(scores)
    }
}

/// Score a prediction against the observed series.
///
/// Fails with an alignment error unless both series share the time index and
/// component count. Stochastic inputs are refused unless the scorer declares
/// `probabilistic_support`; fittable scorers must be fitted first. Univariate
/// scorers are applied to each component pair and the results stacked.
///
/// # Example
///
/// ```rust
/// use scorer_core::{score_from_prediction, DifferenceScorer};
/// use scorer_spi::TimeSeries;
///
/// let actual = TimeSeries::from_values(vec![5.0, 7.0]).unwrap();
/// let predicted = TimeSeries::from_values(vec![3.0, 7.0]).unwrap();
/// let scores = score_from_prediction(&DifferenceScorer::new(), &actual, &predicted).unwrap();
/// assert_eq!(scores.component_values(0), Some(vec![2.0, 0.0]));
/// ```
pub fn score_from_prediction<S>(
    scorer: &S,
    actual: &TimeSeries,
    predicted: &TimeSeries,
) -> Result<TimeSeries>
where
    S: AnomalyScorer + ?Sized,
{
    let capabilities = scorer.capabilities();
    capabilities.validate()?;

    actual.check_aligned(predicted)?;
    ensure_deterministic(scorer, &[actual, predicted])?;
    ensure_fitted(scorer)?;

    debug!(
        scorer = scorer.name(),
        steps = actual.len(),
        components = actual.n_components(),
        per_component = capabilities.univariate,
        "scoring prediction"
    );

    let scores = if capabilities.univariate && actual.n_components() > 1 {
        let parts = (0..actual.n_components())
            .map(|c| {
                let a = actual.component_at(c)?;
                let p = predicted.component_at(c)?;
                scorer.score_core(&a, &p)
            })
            .collect::<Result<Vec<_>>>()?;
        TimeSeries::stack(&parts)?
    } else {
        scorer.score_core(actual, predicted)?
    };

    aggregate(capabilities, scores)
}

/// Score each `(actual, predicted)` pair in order, stopping at the first error.
pub fn score_all_from_prediction<S>(
    scorer: &S,
    pairs: &[(TimeSeries, TimeSeries)],
) -> Result<Vec<TimeSeries>>
where
    S: AnomalyScorer + ?Sized,
{
    pairs
        .iter()
        .map(|(actual, predicted)| score_from_prediction(scorer, actual, predicted))
        .collect()
}

/// Score a series on its own.
///
/// Only scorers declaring `single_series_support` accept this; all others
/// fail with [`ScorerError::SingleSeriesUnsupported`].
pub fn score<S>(scorer: &S, series: &TimeSeries) -> Result<TimeSeries>
where
    S: AnomalyScorer + ?Sized,
{
    let capabilities = scorer.capabilities();
    capabilities.validate()?;

    if !capabilities.single_series_support {
        return Err(ScorerError::SingleSeriesUnsupported {
            scorer: scorer.name().to_string(),
        });
    }
    ensure_deterministic(scorer, &[series])?;
    ensure_fitted(scorer)?;

    debug!(scorer = scorer.name(), steps = series.len(), "scoring series");

    let scores = if capabilities.univariate && series.n_components() > 1 {
        let parts = (0..series.n_components())
            .map(|c| scorer.score_core_single(&series.component_at(c)?))
            .collect::<Result<Vec<_>>>()?;
        TimeSeries::stack(&parts)?
    } else {
        scorer.score_core_single(series)?
    };

    aggregate(capabilities, scores)
}

/// Calibrate a fittable scorer on reference data.
pub fn fit<S>(scorer: &mut S, series: &TimeSeries) -> Result<()>
where
    S: AnomalyScorer + ?Sized,
{
    if !scorer.capabilities().fittable {
        return Err(ScorerError::NotFittable {
            scorer: scorer.name().to_string(),
        });
    }
    ensure_deterministic(scorer, &[series])?;

    debug!(scorer = scorer.name(), steps = series.len(), "fitting scorer");
    scorer.fit_core(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DifferenceScorer, NormScorer};

    /// Single-series scorer that learns an offset and reports the deviation from it.
    struct OffsetScorer {
        offset: Option<f64>,
        capabilities: ScorerCapabilities,
    }

    impl OffsetScorer {
        fn new(window: usize) -> Self {
            Self {
                offset: None,
                capabilities: ScorerCapabilities::default()
                    .univariate(true)
                    .fittable(true)
                    .single_series_support(true)
                    .window(window)
                    .window_agg(window > 1),
            }
        }
    }

    impl AnomalyScorer for OffsetScorer {
        fn name(&self) -> &str {
            "Offset"
        }

        fn capabilities(&self) -> &ScorerCapabilities {
            &self.capabilities
        }

        fn score_core(&self, actual: &TimeSeries, predicted: &TimeSeries) -> Result<TimeSeries> {
            Ok(actual.checked_sub(predicted)?)
        }

        fn score_core_single(&self, series: &TimeSeries) -> Result<TimeSeries> {
            let offset = self.offset.unwrap_or_default();
            Ok(series.map(|v| v - offset))
        }

        fn fit_core(&mut self, series: &TimeSeries) -> Result<()> {
            let values = series.values();
            self.offset = Some(values.iter().sum::<f64>() / values.len() as f64);
            Ok(())
        }

        fn is_fitted(&self) -> bool {
            self.offset.is_some()
        }
    }

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn test_difference_through_pipeline() {
        let scores =
            score_from_prediction(&DifferenceScorer::new(), &series(&[5.0, 7.0]), &series(&[3.0, 7.0]))
                .unwrap();
        assert_eq!(scores.component_values(0), Some(vec![2.0, 0.0]));
    }

    #[test]
    fn test_misaligned_pair_rejected() {
        let err = score_from_prediction(
            &DifferenceScorer::new(),
            &series(&[1.0, 2.0, 3.0]),
            &series(&[1.0, 2.0]),
        )
        .unwrap_err();
        assert!(err.is_alignment_error());
    }

    #[test]
    fn test_stochastic_prediction_rejected() {
        let actual = series(&[1.0, 2.0]);
        let predicted =
            TimeSeries::with_samples(vec![0, 1], vec!["0".to_string()], 2, vec![1.0, 1.0, 2.0, 2.0])
                .unwrap();
        let err = score_from_prediction(&DifferenceScorer::new(), &actual, &predicted).unwrap_err();
        assert!(matches!(err, ScorerError::ProbabilisticUnsupported { .. }));

        let reduced = predicted.mean_over_samples();
        assert!(score_from_prediction(&DifferenceScorer::new(), &actual, &reduced).is_ok());
    }

    #[test]
    fn test_single_series_refused_for_difference() {
        let err = score(&DifferenceScorer::new(), &series(&[1.0])).unwrap_err();
        assert!(matches!(err, ScorerError::SingleSeriesUnsupported { .. }));
    }

    #[test]
    fn test_fit_refused_for_difference() {
        let mut scorer = DifferenceScorer::new();
        let err = fit(&mut scorer, &series(&[1.0])).unwrap_err();
        assert!(matches!(err, ScorerError::NotFittable { .. }));
    }

    #[test]
    fn test_fittable_scorer_requires_fit() {
        let mut scorer = OffsetScorer::new(1);
        let data = series(&[1.0, 3.0]);
        assert!(matches!(
            score(&scorer, &data),
            Err(ScorerError::NotFitted { .. })
        ));

        fit(&mut scorer, &data).unwrap();
        let scores = score(&scorer, &data).unwrap();
        assert_eq!(scores.component_values(0), Some(vec![-1.0, 1.0]));
    }

    #[test]
    fn test_window_aggregation_applied() {
        let mut scorer = OffsetScorer::new(2);
        fit(&mut scorer, &series(&[0.0])).unwrap();

        let scores = score(&scorer, &series(&[1.0, 3.0, 5.0])).unwrap();
        assert_eq!(scores.times(), &[1, 2]);
        assert_eq!(scores.component_values(0), Some(vec![2.0, 4.0]));
    }

    #[test]
    fn test_univariate_scorer_dispatched_per_component() {
        let names = vec!["a".to_string(), "b".to_string()];
        let actual = TimeSeries::new(vec![0], names.clone(), vec![vec![1.0, -4.0]]).unwrap();
        let predicted = TimeSeries::new(vec![0], names, vec![vec![3.0, 0.0]]).unwrap();

        let scorer = NormScorer::new(2.0, true).unwrap();
        let scores = score_from_prediction(&scorer, &actual, &predicted).unwrap();
        assert_eq!(scores.components(), actual.components());
        assert_eq!(scores.values(), &[2.0, 4.0]);
    }

    #[test]
    fn test_score_all_stops_on_first_error() {
        let good = (series(&[1.0]), series(&[0.5]));
        let bad = (series(&[1.0, 2.0]), series(&[1.0]));
        let scorer = DifferenceScorer::new();

        let all = score_all_from_prediction(&scorer, &[good.clone(), good.clone()]).unwrap();
        assert_eq!(all.len(), 2);
        assert!(score_all_from_prediction(&scorer, &[good, bad]).is_err());
    }

    #[test]
    fn test_works_through_trait_object() {
        let scorer: Box<dyn AnomalyScorer> = Box::new(DifferenceScorer::new());
        let scores = score_from_prediction(scorer.as_ref(), &series(&[2.0]), &series(&[1.0])).unwrap();
        assert_eq!(scores.value(0, 0), Some(1.0));
    }
}
