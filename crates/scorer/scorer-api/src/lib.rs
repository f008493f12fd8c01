//! Anomaly Scorer API
//!
//! Configuration types for anomaly scorers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use scorer_spi::{AnomalyScorer, Result, ScorerCapabilities, ScorerError, TimeSeries};

// ============================================================================
// Scorer Configuration
// ============================================================================

/// Norm scorer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormConfig {
    /// Order of the norm taken across components (default: 2.0).
    pub ord: f64,
    /// Score each component separately as an absolute difference.
    pub component_wise: bool,
}

impl Default for NormConfig {
    fn default() -> Self {
        Self {
            ord: 2.0,
            component_wise: false,
        }
    }
}

impl NormConfig {
    pub fn new(ord: f64, component_wise: bool) -> Self {
        Self {
            ord,
            component_wise,
        }
    }
}

/// Which scorer to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScorerConfig {
    /// Pointwise `actual - predicted`.
    #[default]
    Difference,
    /// p-norm of `actual - predicted`.
    Norm(NormConfig),
}

impl ScorerConfig {
    pub fn name(&self) -> &'static str {
        match self {
            ScorerConfig::Difference => "difference",
            ScorerConfig::Norm(_) => "norm",
        }
    }
}

impl fmt::Display for ScorerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScorerConfig {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "difference" | "diff" => Ok(ScorerConfig::Difference),
            "norm" => Ok(ScorerConfig::Norm(NormConfig::default())),
            other => Err(ScorerError::InvalidParameter {
                name: "scorer".to_string(),
                reason: format!("unknown scorer '{}' (expected difference or norm)", other),
            }),
        }
    }
}
