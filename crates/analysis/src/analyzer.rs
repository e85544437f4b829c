//! Bill analyzer service.

use anomaly_facade::{build_policy, default_policy, AnomalyPolicy};
use efficiency_facade::{
    Bill, EfficiencyScores, Metric, SaturationScorer, SchoolProfile, ScoreCalculator,
};
use trend_facade::predict_next;

use crate::alert::UsageAlert;
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::report::{MetricPredictions, SubmissionReport, TrendInsights, TrendPoint};

/// Forecast the next value of a series.
///
/// A single observation is echoed back as its own forecast; otherwise this
/// is the clamped linear trend, or `None` for an empty series.
pub fn forecast_with_fallback(series: &[f64]) -> Option<f64> {
    match series {
        [] => None,
        [only] => Some(*only),
        _ => predict_next(series),
    }
}

fn predictions_for(history: &[Bill]) -> MetricPredictions {
    let mut predictions = MetricPredictions::default();
    for metric in Metric::ALL {
        predictions.set(metric, forecast_with_fallback(&metric.series(history)));
    }
    predictions
}

/// Scores, forecasts and flags bills with a fixed configuration.
///
/// Holds no per-school state, so one analyzer can serve every school
/// concurrently.
pub struct BillAnalyzer {
    config: AnalyzerConfig,
    scorer: SaturationScorer,
    submission_policy: Box<dyn AnomalyPolicy>,
    insight_policy: Box<dyn AnomalyPolicy>,
}

impl std::fmt::Debug for BillAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillAnalyzer")
            .field("config", &self.config)
            .finish()
    }
}

impl BillAnalyzer {
    /// Build an analyzer, validating every constant in `config`.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Ok(Self {
            config,
            scorer: SaturationScorer::new(config.scoring)?,
            submission_policy: build_policy(config.submission_policy)?,
            insight_policy: build_policy(config.insight_policy)?,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Score a bill without forecasting or anomaly checks.
    pub fn score(&self, school: &SchoolProfile, bill: &Bill) -> Result<EfficiencyScores> {
        Ok(self.scorer.compute(bill, school)?)
    }

    /// Analyze a newly submitted bill.
    ///
    /// `history` is the school's existing bills in ascending period order
    /// and does not contain `bill`. The new bill is merged into it before
    /// forecasting, and each metric's reading is checked against the merged
    /// series with the submission policy.
    pub fn submit(
        &self,
        school: &SchoolProfile,
        history: &[Bill],
        bill: &Bill,
    ) -> Result<SubmissionReport> {
        let scores = self.score(school, bill)?;
        tracing::debug!(
            period = %bill.period,
            electricity_score = scores.electricity_score,
            water_score = scores.water_score,
            "scored bill"
        );

        let merged = merge_history(history, bill);
        let predictions = predictions_for(&merged);

        let mut alert = UsageAlert::default();
        for metric in Metric::ALL {
            let flagged = self
                .submission_policy
                .is_anomaly(metric.value(bill), &metric.series(&merged));
            alert.set(metric, flagged);
        }
        if alert.any() {
            tracing::info!(
                period = %bill.period,
                policy = %self.submission_policy.kind(),
                electricity = alert.electricity,
                water = alert.water,
                "unusual usage"
            );
        }

        Ok(SubmissionReport {
            bill: bill.clone(),
            efficiency_score: scores.combined_score,
            scores,
            predictions,
            anomaly: alert.message(),
            alert,
            history_len: merged.len(),
        })
    }

    /// Summarize a school's history: the usage trend, next-period forecasts
    /// and whether the latest bill stands out under the insight policy.
    pub fn insights(&self, history: &[Bill]) -> TrendInsights {
        let Some(latest) = history.last() else {
            return TrendInsights::default();
        };

        let mut alert = UsageAlert::default();
        for metric in Metric::ALL {
            let flagged = self
                .insight_policy
                .is_anomaly(metric.value(latest), &metric.series(history));
            alert.set(metric, flagged);
        }

        TrendInsights {
            trends: history.iter().map(TrendPoint::from).collect(),
            predictions: predictions_for(history),
            anomaly: alert.message(),
            alert,
        }
    }
}

impl Default for BillAnalyzer {
    fn default() -> Self {
        let config = AnalyzerConfig::default();
        Self {
            config,
            scorer: SaturationScorer::default(),
            submission_policy: default_policy(config.submission_policy.kind()),
            insight_policy: default_policy(config.insight_policy.kind()),
        }
    }
}

/// Insert `bill` into an ascending history, after any bill of the same period.
fn merge_history(history: &[Bill], bill: &Bill) -> Vec<Bill> {
    let mut merged = Vec::with_capacity(history.len() + 1);
    merged.extend_from_slice(history);
    merged.push(bill.clone());
    merged.sort_by(|a, b| a.period.cmp(&b.period));
    merged
}
