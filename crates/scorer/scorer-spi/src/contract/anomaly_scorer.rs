//! Anomaly scorer trait definition.

use series_spi::TimeSeries;

use crate::error::{Result, ScorerError};
use crate::model::ScorerCapabilities;

/// Anomaly scorer trait.
///
/// A scorer is a fixed set of [`ScorerCapabilities`] plus one transformation
/// from an `(actual, predicted)` pair to a score series. Implementations only
/// provide the core transformation; alignment checks, per-component dispatch,
/// fitting guards and window aggregation are applied around it by the scoring
/// pipeline according to the declared flags.
///
/// The optional hooks default to the errors matching a scorer that declares
/// neither `single_series_support` nor `fittable`.
pub trait AnomalyScorer: Send + Sync {
    /// Display name of the scorer.
    fn name(&self) -> &str;

    /// Capability flags fixed at construction.
    fn capabilities(&self) -> &ScorerCapabilities;

    /// Score an aligned `(actual, predicted)` pair.
    ///
    /// Called by the pipeline with inputs already checked for alignment and,
    /// for univariate scorers, already split into single components.
    fn score_core(&self, actual: &TimeSeries, predicted: &TimeSeries) -> Result<TimeSeries>;

    /// Score a series on its own.
    fn score_core_single(&self, _series: &TimeSeries) -> Result<TimeSeries> {
        Err(ScorerError::SingleSeriesUnsupported {
            scorer: self.name().to_string(),
        })
    }

    /// Calibrate the scorer on reference data.
    fn fit_core(&mut self, _series: &TimeSeries) -> Result<()> {
        Err(ScorerError::NotFittable {
            scorer: self.name().to_string(),
        })
    }

    /// Check if the scorer is ready to score. Non-fittable scorers always are.
    fn is_fitted(&self) -> bool {
        !self.capabilities().fittable
    }
}
