//! Anomaly policy implementations.

use anomaly_api::{PolicyConfig, RatioConfig, ZScoreConfig};
use anomaly_spi::{AnomalyPolicy, AnomalyVerdict, PolicyKind, Result};

use crate::stats::{mean, population_stats};

// ============================================================================
// Z-Score Policy
// ============================================================================

/// Flags a reading more than `threshold` population standard deviations
/// from the historical mean.
///
/// A constant history has zero spread. A reading equal to that constant
/// scores 0 and is not anomalous; any other reading scores an infinite z
/// and is flagged.
#[derive(Debug, Clone)]
pub struct ZScorePolicy {
    config: ZScoreConfig,
}

impl ZScorePolicy {
    /// Create a z-score policy with the given threshold and default history length.
    pub fn new(threshold: f64) -> Result<Self> {
        Self::from_config(ZScoreConfig::new(threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: ZScoreConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ZScoreConfig {
        &self.config
    }

    /// Z-score of `value` against `history`, or `None` when the history is
    /// shorter than the configured minimum.
    pub fn z_score(&self, value: f64, history: &[f64]) -> Option<f64> {
        if history.len() < self.config.min_history {
            return None;
        }
        let (mean, std_dev) = population_stats(history)?;
        if std_dev == 0.0 {
            if value == mean {
                return Some(0.0);
            }
            // NaN readings stay NaN and are never flagged
            return Some((value - mean).signum() * f64::INFINITY);
        }
        Some((value - mean) / std_dev)
    }
}

impl Default for ZScorePolicy {
    fn default() -> Self {
        Self {
            config: ZScoreConfig::default(),
        }
    }
}

impl AnomalyPolicy for ZScorePolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ZScore
    }

    fn evaluate(&self, value: f64, series: &[f64]) -> AnomalyVerdict {
        let threshold = self.config.threshold;
        match self.z_score(value, series) {
            Some(z) => AnomalyVerdict::new(z.abs() > threshold, Some(z), threshold),
            None => AnomalyVerdict::insufficient(threshold),
        }
    }
}

// ============================================================================
// Ratio Policy
// ============================================================================

/// Flags a latest value above `multiplier` times the mean of the series.
///
/// The series includes the latest value itself, so a single-element series
/// is never flagged.
#[derive(Debug, Clone)]
pub struct RatioPolicy {
    config: RatioConfig,
}

impl RatioPolicy {
    /// Create a ratio policy with the given multiplier.
    pub fn new(multiplier: f64) -> Result<Self> {
        Self::from_config(RatioConfig::new(multiplier))
    }

    /// Create from configuration.
    pub fn from_config(config: RatioConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RatioConfig {
        &self.config
    }
}

impl Default for RatioPolicy {
    fn default() -> Self {
        Self {
            config: RatioConfig::default(),
        }
    }
}

impl AnomalyPolicy for RatioPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Ratio
    }

    fn evaluate(&self, value: f64, series: &[f64]) -> AnomalyVerdict {
        let multiplier = self.config.multiplier;
        let Some(mean) = mean(series) else {
            return AnomalyVerdict::insufficient(multiplier);
        };
        let ratio = (mean != 0.0).then(|| value / mean);
        AnomalyVerdict::new(value > multiplier * mean, ratio, multiplier)
    }
}

// ============================================================================
// Construction and shorthands
// ============================================================================

/// Build a boxed policy from configuration.
pub fn build_policy(config: PolicyConfig) -> Result<Box<dyn AnomalyPolicy>> {
    Ok(match config {
        PolicyConfig::ZScore(c) => Box::new(ZScorePolicy::from_config(c)?),
        PolicyConfig::Ratio(c) => Box::new(RatioPolicy::from_config(c)?),
    })
}

/// The default-configured policy of `kind`, matching `PolicyConfig::from(kind)`.
pub fn default_policy(kind: PolicyKind) -> Box<dyn AnomalyPolicy> {
    match kind {
        PolicyKind::ZScore => Box::new(ZScorePolicy::default()),
        PolicyKind::Ratio => Box::new(RatioPolicy::default()),
    }
}

/// Z-score check with the default threshold of 2 and at least 3 historical values.
pub fn is_anomaly_zscore(value: f64, history: &[f64]) -> bool {
    ZScorePolicy::default().is_anomaly(value, history)
}

/// Ratio check of the latest value against twice the mean of the full series,
/// latest value included.
pub fn is_anomaly_ratio(latest: f64, series: &[f64]) -> bool {
    RatioPolicy::default().is_anomaly(latest, series)
}
