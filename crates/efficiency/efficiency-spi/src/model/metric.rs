//! Consumption metric selector.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Bill;

/// A single consumption series tracked per school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Electricity,
    Water,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Electricity, Metric::Water];

    /// Read this metric's usage from a bill.
    pub fn value(self, bill: &Bill) -> f64 {
        match self {
            Metric::Electricity => bill.electricity_kwh,
            Metric::Water => bill.water_liters,
        }
    }

    /// Extract this metric's series from a history, preserving order.
    pub fn series(self, history: &[Bill]) -> Vec<f64> {
        history.iter().map(|bill| self.value(bill)).collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Electricity => "electricity",
            Metric::Water => "water",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_extraction() {
        let history = vec![Bill::new("2024-01", 10.0, 100.0), Bill::new("2024-02", 20.0, 200.0)];
        assert_eq!(Metric::Electricity.series(&history), vec![10.0, 20.0]);
        assert_eq!(Metric::Water.series(&history), vec![100.0, 200.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Metric::Water.to_string(), "water");
    }
}
