//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that policies must implement.

mod anomaly_policy;

pub use anomaly_policy::AnomalyPolicy;
