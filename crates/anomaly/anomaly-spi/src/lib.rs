//! Anomaly Detection Service Provider Interface
//!
//! Defines traits and types for flagging an unusual consumption reading
//! against a metric's history.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AnomalyPolicy;
pub use error::{AnomalyError, Result};
pub use model::{AnomalyVerdict, PolicyKind};
