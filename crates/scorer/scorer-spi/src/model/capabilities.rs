//! Capability flags declared by every scorer.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScorerError};

/// Declarative description of what a scorer needs and supports.
///
/// The flags are fixed when the scorer is constructed. The scoring pipeline
/// reads them to decide whether fitting, per-component dispatch, windowed
/// aggregation or probabilistic handling must wrap the core transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerCapabilities {
    /// Score each component independently instead of all components jointly.
    pub univariate: bool,
    /// Trailing window size the scorer aggregates over (at least 1).
    pub window: usize,
    /// Requires a fitting step on reference data before scoring.
    pub fittable: bool,
    /// Can score a single series without a prediction.
    pub single_series_support: bool,
    /// Accepts stochastic (multi-sample) inputs.
    pub probabilistic_support: bool,
    /// Averages raw pointwise scores over the trailing window.
    pub window_agg: bool,
}

impl Default for ScorerCapabilities {
    /// Stateless, joint, pairwise scoring without windowing.
    fn default() -> Self {
        Self {
            univariate: false,
            window: 1,
            fittable: false,
            single_series_support: false,
            probabilistic_support: false,
            window_agg: false,
        }
    }
}

impl ScorerCapabilities {
    pub fn univariate(mut self, univariate: bool) -> Self {
        self.univariate = univariate;
        self
    }

    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn fittable(mut self, fittable: bool) -> Self {
        self.fittable = fittable;
        self
    }

    pub fn single_series_support(mut self, supported: bool) -> Self {
        self.single_series_support = supported;
        self
    }

    pub fn probabilistic_support(mut self, supported: bool) -> Self {
        self.probabilistic_support = supported;
        self
    }

    pub fn window_agg(mut self, window_agg: bool) -> Self {
        self.window_agg = window_agg;
        self
    }

    /// Whether the pipeline must aggregate scores over a trailing window.
    pub fn aggregates_window(&self) -> bool {
        self.window_agg && self.window > 1
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(ScorerError::InvalidParameter {
                name: "window".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
