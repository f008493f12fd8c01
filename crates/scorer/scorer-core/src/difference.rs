//! Difference scorer.

use std::fmt;

use scorer_spi::{AnomalyScorer, Result, ScorerCapabilities, TimeSeries};

/// Scores a prediction by its pointwise difference `actual - predicted`.
///
/// Multivariate inputs give a multivariate score with the component names of
/// the actual series. The scorer is stateless, needs no fitting, always
/// requires both series and only accepts deterministic predictions.
#[derive(Debug, Clone)]
pub struct DifferenceScorer {
    capabilities: ScorerCapabilities,
}

impl DifferenceScorer {
    pub fn new() -> Self {
        Self {
            capabilities: ScorerCapabilities {
                univariate: false,
                window: 1,
                fittable: false,
                single_series_support: false,
                probabilistic_support: false,
                window_agg: false,
            },
        }
    }
}

impl Default for DifferenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DifferenceScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Difference")
    }
}

impl AnomalyScorer for DifferenceScorer {
    fn name(&self) -> &str {
        "Difference"
    }

    fn capabilities(&self) -> &ScorerCapabilities {
        &self.capabilities
    }

    fn score_core(&self, actual: &TimeSeries, predicted: &TimeSeries) -> Result<TimeSeries> {
        Ok(actual.checked_sub(predicted)?)
    }
}
