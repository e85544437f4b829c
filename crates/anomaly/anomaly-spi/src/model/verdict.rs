//! Anomaly verdict.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyVerdict {
    pub is_anomaly: bool,
    /// Policy-specific score: the z-score, or the value-to-mean ratio.
    /// `None` when the history was too short or the score is undefined.
    pub score: Option<f64>,
    /// Threshold the score was compared against.
    pub threshold: f64,
}

impl AnomalyVerdict {
    pub fn new(is_anomaly: bool, score: Option<f64>, threshold: f64) -> Self {
        Self {
            is_anomaly,
            score,
            threshold,
        }
    }

    /// Not enough history to judge; never anomalous.
    pub fn insufficient(threshold: f64) -> Self {
        Self::new(false, None, threshold)
    }
}
