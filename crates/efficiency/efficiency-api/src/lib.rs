//! Efficiency Scoring API
//!
//! Configuration types for efficiency scoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use efficiency_spi::{
    Bill, EfficiencyError, EfficiencyScores, Metric, Result, SchoolProfile, ScoreCalculator,
};

/// kWh per student at which the electricity score reaches 0.
pub const ELECTRICITY_SATURATION: f64 = 50.0;

/// Liters per student at which the water score reaches 0.
pub const WATER_SATURATION: f64 = 100.0;

/// Saturation constants for the per-student score curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub electricity_saturation: f64,
    pub water_saturation: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            electricity_saturation: ELECTRICITY_SATURATION,
            water_saturation: WATER_SATURATION,
        }
    }
}

impl ScoringConfig {
    pub fn new(electricity_saturation: f64, water_saturation: f64) -> Self {
        Self {
            electricity_saturation,
            water_saturation,
        }
    }

    /// Saturation constant for the given metric.
    pub fn saturation(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Electricity => self.electricity_saturation,
            Metric::Water => self.water_saturation,
        }
    }

    /// Both constants must be positive and finite.
    pub fn validate(&self) -> Result<()> {
        for metric in Metric::ALL {
            let value = self.saturation(metric);
            if !value.is_finite() || value <= 0.0 {
                return Err(EfficiencyError::InvalidParameter {
                    name: format!("{}_saturation", metric),
                    reason: format!("must be positive, got {}", value),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = ScoringConfig::default();
        assert_eq!(config.saturation(Metric::Electricity), 50.0);
        assert_eq!(config.saturation(Metric::Water), 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_saturation_rejected() {
        let err = ScoringConfig::new(0.0, 100.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: electricity_saturation - must be positive, got 0"
        );
    }

    #[test]
    fn test_deserialize_camel_case() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"electricitySaturation":40.0,"waterSaturation":80.0}"#)
                .unwrap();
        assert_eq!(config, ScoringConfig::new(40.0, 80.0));
    }
}
