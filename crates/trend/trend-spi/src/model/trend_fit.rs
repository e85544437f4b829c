//! Fitted trend line.

use serde::{Deserialize, Serialize};

/// Parameters of `value = intercept + slope * index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendFit {
    pub intercept: f64,
    /// Change in consumption per period.
    pub slope: f64,
    /// Coefficient of determination. 1.0 for a constant series.
    pub r_squared: f64,
    pub n_observations: usize,
}

impl TrendFit {
    /// Evaluate the line at a sequence position.
    pub fn value_at(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }

    /// Raw one-step-ahead forecast, before clamping.
    pub fn next_value(&self) -> f64 {
        self.value_at(self.n_observations as f64)
    }
}
