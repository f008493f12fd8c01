//! Contract definitions for anomaly scorers.
//!
//! This module contains trait definitions that providers must implement.

mod anomaly_scorer;

pub use anomaly_scorer::AnomalyScorer;
