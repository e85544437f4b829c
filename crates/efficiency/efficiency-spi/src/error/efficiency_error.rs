//! Efficiency scoring error types.

use thiserror::Error;

/// Efficiency scoring errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EfficiencyError {
    /// An input would make normalization divide by zero or produce NaN.
    #[error("Validation error: {field} - {reason}")]
    Validation { field: String, reason: String },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl EfficiencyError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for efficiency scoring operations.
pub type Result<T> = std::result::Result<T, EfficiencyError>;
