//! Scorer construction from configuration.

use scorer_api::ScorerConfig;
use scorer_spi::{AnomalyScorer, Result};

use crate::{DifferenceScorer, NormScorer};

/// Build the scorer described by `config`.
pub fn build_scorer(config: &ScorerConfig) -> Result<Box<dyn AnomalyScorer>> {
    let scorer: Box<dyn AnomalyScorer> = match config {
        ScorerConfig::Difference => Box::new(DifferenceScorer::new()),
        ScorerConfig::Norm(norm) => Box::new(NormScorer::from_config(*norm)?),
    };
    scorer.capabilities().validate()?;
    Ok(scorer)
}
