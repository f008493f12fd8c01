//! Data models for anomaly scoring.

mod capabilities;

pub use capabilities::ScorerCapabilities;
