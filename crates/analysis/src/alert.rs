//! Human-readable usage alerts.

use efficiency_facade::Metric;
use serde::{Deserialize, Serialize};

/// Per-metric anomaly flags for one bill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageAlert {
    pub electricity: bool,
    pub water: bool,
}

impl UsageAlert {
    pub fn set(&mut self, metric: Metric, flagged: bool) {
        match metric {
            Metric::Electricity => self.electricity = flagged,
            Metric::Water => self.water = flagged,
        }
    }

    pub fn is_flagged(&self, metric: Metric) -> bool {
        match metric {
            Metric::Electricity => self.electricity,
            Metric::Water => self.water,
        }
    }

    pub fn any(&self) -> bool {
        self.electricity || self.water
    }

    /// `"High electricity usage detected"`, `"High water usage detected"`,
    /// both joined with `" & "`, or `None`.
    pub fn message(&self) -> Option<String> {
        let parts: Vec<String> = Metric::ALL
            .into_iter()
            .filter(|&metric| self.is_flagged(metric))
            .map(|metric| format!("High {} usage detected", metric))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" & "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_no_message() {
        assert_eq!(UsageAlert::default().message(), None);
        assert!(!UsageAlert::default().any());
    }

    #[test]
    fn test_single_metric_messages() {
        let mut alert = UsageAlert::default();
        alert.set(Metric::Electricity, true);
        assert_eq!(alert.message().as_deref(), Some("High electricity usage detected"));

        let alert = UsageAlert {
            electricity: false,
            water: true,
        };
        assert_eq!(alert.message().as_deref(), Some("High water usage detected"));
    }

    #[test]
    fn test_both_metrics_joined() {
        let alert = UsageAlert {
            electricity: true,
            water: true,
        };
        assert_eq!(
            alert.message().as_deref(),
            Some("High electricity usage detected & High water usage detected")
        );
    }
}
