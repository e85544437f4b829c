//! Data models for anomaly detection.

mod policy_kind;
mod verdict;

pub use policy_kind::PolicyKind;
pub use verdict::AnomalyVerdict;
