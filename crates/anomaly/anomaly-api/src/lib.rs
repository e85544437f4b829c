//! Anomaly Detection API
//!
//! Configuration types for the anomaly policies.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyPolicy, AnomalyVerdict, PolicyKind, Result};

fn invalid(name: &str, reason: String) -> AnomalyError {
    AnomalyError::InvalidParameter {
        name: name.to_string(),
        reason,
    }
}

// ============================================================================
// Policy Configuration
// ============================================================================

/// Z-score policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ZScoreConfig {
    /// Absolute z-score above which a reading is anomalous (default: 2.0).
    pub threshold: f64,
    /// Fewest historical values needed to estimate spread (default: 3).
    pub min_history: usize,
}

impl Default for ZScoreConfig {
    fn default() -> Self {
        Self {
            threshold: 2.0,
            min_history: 3,
        }
    }
}

impl ZScoreConfig {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn with_min_history(mut self, min_history: usize) -> Self {
        self.min_history = min_history;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(invalid(
                "threshold",
                format!("must be a non-negative finite number, got {}", self.threshold),
            ));
        }
        if self.min_history == 0 {
            return Err(invalid("min_history", "must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Ratio-to-mean policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatioConfig {
    /// Multiple of the series mean above which the latest value is
    /// anomalous (default: 2.0).
    pub multiplier: f64,
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self { multiplier: 2.0 }
    }
}

impl RatioConfig {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.multiplier.is_finite() || self.multiplier <= 0.0 {
            return Err(invalid(
                "multiplier",
                format!("must be a positive finite number, got {}", self.multiplier),
            ));
        }
        Ok(())
    }
}

/// Selects and configures one policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PolicyConfig {
    ZScore(ZScoreConfig),
    Ratio(RatioConfig),
}

impl PolicyConfig {
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicyConfig::ZScore(_) => PolicyKind::ZScore,
            PolicyConfig::Ratio(_) => PolicyKind::Ratio,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            PolicyConfig::ZScore(config) => config.validate(),
            PolicyConfig::Ratio(config) => config.validate(),
        }
    }
}

impl From<PolicyKind> for PolicyConfig {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::ZScore => PolicyConfig::ZScore(ZScoreConfig::default()),
            PolicyKind::Ratio => PolicyConfig::Ratio(RatioConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ZScoreConfig::default().threshold, 2.0);
        assert_eq!(ZScoreConfig::default().min_history, 3);
        assert_eq!(RatioConfig::default().multiplier, 2.0);
    }

    #[test]
    fn test_zscore_validation() {
        assert!(ZScoreConfig::new(-1.0).validate().is_err());
        assert!(ZScoreConfig::new(f64::NAN).validate().is_err());
        assert!(ZScoreConfig::default().with_min_history(0).validate().is_err());
        assert!(ZScoreConfig::new(3.0).validate().is_ok());
    }

    #[test]
    fn test_ratio_validation() {
        let err = RatioConfig::new(0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: multiplier - must be a positive finite number, got 0"
        );
    }

    #[test]
    fn test_policy_config_tagged_json() {
        let config: PolicyConfig =
            serde_json::from_str(r#"{"policy":"z_score","threshold":2.5}"#).unwrap();
        assert_eq!(
            config,
            PolicyConfig::ZScore(ZScoreConfig {
                threshold: 2.5,
                min_history: 3
            })
        );
        assert_eq!(config.kind(), PolicyKind::ZScore);

        let config: PolicyConfig = serde_json::from_str(r#"{"policy":"ratio"}"#).unwrap();
        assert_eq!(config, PolicyConfig::Ratio(RatioConfig::default()));
    }

    #[test]
    fn test_from_kind_uses_defaults() {
        assert_eq!(
            PolicyConfig::from(PolicyKind::Ratio),
            PolicyConfig::Ratio(RatioConfig::default())
        );
    }
}
