//! Analysis error types.

use anomaly_facade::AnomalyError;
use efficiency_facade::EfficiencyError;
use thiserror::Error;

/// Errors raised while analyzing bills.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Efficiency(#[from] EfficiencyError),

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),
}

impl AnalysisError {
    /// True when the caller supplied an unusable school or bill.
    pub fn is_validation(&self) -> bool {
        matches!(self, AnalysisError::Efficiency(EfficiencyError::Validation { .. }))
    }
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;
