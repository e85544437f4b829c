//! Analysis outputs.

use efficiency_facade::{Bill, EfficiencyScores, Metric};
use serde::{Deserialize, Serialize};

use crate::alert::UsageAlert;

/// Next-period forecast per metric. `None` when there is no history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricPredictions {
    pub electricity: Option<f64>,
    pub water: Option<f64>,
}

impl MetricPredictions {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Electricity => self.electricity,
            Metric::Water => self.water,
        }
    }

    pub(crate) fn set(&mut self, metric: Metric, value: Option<f64>) {
        match metric {
            Metric::Electricity => self.electricity = value,
            Metric::Water => self.water = value,
        }
    }
}

/// Result of submitting one bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReport {
    pub bill: Bill,
    pub scores: EfficiencyScores,
    /// The school's new efficiency score. Replaces the previous value.
    pub efficiency_score: f64,
    pub predictions: MetricPredictions,
    pub alert: UsageAlert,
    pub anomaly: Option<String>,
    /// Bills in the history after this submission.
    pub history_len: usize,
}

/// One point of a school's usage trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub electricity_kwh: f64,
    pub water_liters: f64,
}

impl From<&Bill> for TrendPoint {
    fn from(bill: &Bill) -> Self {
        Self {
            period: bill.period.clone(),
            electricity_kwh: bill.electricity_kwh,
            water_liters: bill.water_liters,
        }
    }
}

/// Usage trend, forecast and latest-bill alert for a school.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendInsights {
    pub trends: Vec<TrendPoint>,
    pub predictions: MetricPredictions,
    pub alert: UsageAlert,
    pub anomaly: Option<String>,
}
