//! Efficiency score result.

use serde::{Deserialize, Serialize};

/// Normalized consumption and bounded efficiency scores for one bill.
///
/// Every score lies in `[0, 100]`; higher means more efficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyScores {
    pub per_student_electricity: f64,
    pub per_area_electricity: f64,
    pub per_student_water: f64,
    pub per_area_water: f64,
    pub electricity_score: f64,
    pub water_score: f64,
    /// Unweighted mean of the electricity and water scores. This becomes the
    /// school's efficiency score, replacing any previous value.
    pub combined_score: f64,
}
