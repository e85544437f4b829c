//! Analyzer configuration.

use anomaly_facade::{PolicyConfig, PolicyKind};
use efficiency_facade::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Constants and policy choices for a [`BillAnalyzer`](crate::BillAnalyzer).
///
/// Defaults reproduce the analysis endpoints: saturation at 50 kWh and
/// 100 L per student, z-score checks on submission and ratio-to-mean checks
/// for trend insights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerConfig {
    pub scoring: ScoringConfig,
    /// Policy applied to a newly submitted bill.
    pub submission_policy: PolicyConfig,
    /// Policy applied to the latest bill when reporting trends.
    pub insight_policy: PolicyConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            submission_policy: PolicyKind::ZScore.into(),
            insight_policy: PolicyKind::Ratio.into(),
        }
    }
}
