//! Monthly bill observation.

use serde::{Deserialize, Serialize};

use crate::error::{EfficiencyError, Result};

/// One period's recorded usage for a school.
///
/// `period` is an orderable key (a `YYYY-MM` month in practice). A history is
/// a slice of bills sorted ascending by period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub period: String,
    /// Electricity usage in kWh.
    pub electricity_kwh: f64,
    /// Water usage in liters.
    pub water_liters: f64,
    #[serde(default)]
    pub electricity_cost: f64,
    #[serde(default)]
    pub water_cost: f64,
}

impl Bill {
    /// Create a bill with zero costs.
    pub fn new(period: impl Into<String>, electricity_kwh: f64, water_liters: f64) -> Self {
        Self {
            period: period.into(),
            electricity_kwh,
            water_liters,
            electricity_cost: 0.0,
            water_cost: 0.0,
        }
    }

    /// Attach the billed amounts. Costs never influence scoring.
    pub fn with_costs(mut self, electricity_cost: f64, water_cost: f64) -> Self {
        self.electricity_cost = electricity_cost;
        self.water_cost = water_cost;
        self
    }

    /// Usage must be non-negative and finite.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("electricity_kwh", self.electricity_kwh),
            ("water_liters", self.water_liters),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EfficiencyError::validation(
                    field,
                    format!("must be a non-negative finite number, got {}", value),
                ));
            }
        }
        Ok(())
    }
}
