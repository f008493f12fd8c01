//! Norm scorer.

use std::fmt;

use scorer_api::NormConfig;
use scorer_spi::{AnomalyScorer, Result, ScorerCapabilities, ScorerError, TimeSeries};

/// Scores a prediction by the size of its error.
///
/// With `component_wise` set the score is `|actual - predicted|` for each
/// component. Otherwise the p-norm of the error vector is taken across all
/// components, giving a univariate score named `"norm"`.
#[derive(Debug, Clone)]
pub struct NormScorer {
    ord: f64,
    component_wise: bool,
    capabilities: ScorerCapabilities,
}

impl NormScorer {
    pub fn new(ord: f64, component_wise: bool) -> Result<Self> {
        if !(ord.is_finite() && ord >= 1.0) {
            return Err(ScorerError::InvalidParameter {
                name: "ord".to_string(),
                reason: format!("must be a finite number >= 1, got {}", ord),
            });
        }

        Ok(Self {
            ord,
            component_wise,
            capabilities: ScorerCapabilities::default().univariate(component_wise),
        })
    }

    pub fn from_config(config: NormConfig) -> Result<Self> {
        Self::new(config.ord, config.component_wise)
    }

    pub fn ord(&self) -> f64 {
        self.ord
    }

    pub fn component_wise(&self) -> bool {
        self.component_wise
    }
}

impl Default for NormScorer {
    fn default() -> Self {
        Self {
            ord: 2.0,
            component_wise: false,
            capabilities: ScorerCapabilities::default(),
        }
    }
}

impl fmt::Display for NormScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Norm (ord={}", self.ord)?;
        if self.component_wise {
            f.write_str(", component-wise")?;
        }
        f.write_str(")")
    }
}

impl AnomalyScorer for NormScorer {
    fn name(&self) -> &str {
        "Norm"
    }

    fn capabilities(&self) -> &ScorerCapabilities {
        &self.capabilities
    }

    fn score_core(&self, actual: &TimeSeries, predicted: &TimeSeries) -> Result<TimeSeries> {
        let diff = actual.checked_sub(predicted)?;
        if self.component_wise {
            return Ok(diff.map(f64::abs));
        }

        let width = diff.n_components();
        let norms = diff
            .values()
            .chunks(width)
            .map(|row| {
                row.iter()
                    .map(|d| d.abs().powf(self.ord))
                    .sum::<f64>()
                    .powf(1.0 / self.ord)
            })
            .collect();

        Ok(TimeSeries::from_columns(
            diff.times().to_vec(),
            vec!["norm".to_string()],
            vec![norms],
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (TimeSeries, TimeSeries) {
        let names = vec!["x".to_string(), "y".to_string()];
        let actual = TimeSeries::new(
            vec![0, 1],
            names.clone(),
            vec![vec![3.0, 4.0], vec![1.0, 1.0]],
        )
        .unwrap();
        let predicted =
            TimeSeries::new(vec![0, 1], names, vec![vec![0.0, 0.0], vec![1.0, 2.0]]).unwrap();
        (actual, predicted)
    }

    #[test]
    fn test_euclidean_norm_is_univariate() {
        let (actual, predicted) = pair();
        let score = NormScorer::default().score_core(&actual, &predicted).unwrap();
        assert_eq!(score.components(), &["norm".to_string()]);
        assert_eq!(score.component_values(0), Some(vec![5.0, 1.0]));
    }

    #[test]
    fn test_manhattan_norm() {
        let (actual, predicted) = pair();
        let scorer = NormScorer::new(1.0, false).unwrap();
        let score = scorer.score_core(&actual, &predicted).unwrap();
        assert_eq!(score.component_values(0), Some(vec![7.0, 1.0]));
    }

    #[test]
    fn test_component_wise_declares_univariate() {
        let scorer = NormScorer::new(2.0, true).unwrap();
        assert!(scorer.capabilities().univariate);
        assert!(!NormScorer::default().capabilities().univariate);
    }

    #[test]
    fn test_component_wise_is_absolute_difference() {
        let (actual, predicted) = pair();
        let scorer = NormScorer::new(2.0, true).unwrap();
        let score = scorer.score_core(&predicted, &actual).unwrap();
        assert_eq!(score.component_values(0), Some(vec![3.0, 0.0]));
        assert_eq!(score.component_values(1), Some(vec![4.0, 1.0]));
    }

    #[test]
    fn test_invalid_ord() {
        assert!(NormScorer::new(0.5, false).is_err());
        assert!(NormScorer::new(f64::INFINITY, false).is_err());
        assert!(NormScorer::new(f64::NAN, true).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(NormScorer::default().to_string(), "Norm (ord=2)");
        assert_eq!(
            NormScorer::new(1.0, true).unwrap().to_string(),
            "Norm (ord=1, component-wise)"
        );
    }
}
