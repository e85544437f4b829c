//! Anomaly Detection Core
//!
//! Implementations of the z-score and ratio-to-mean policies.

mod policies;
mod stats;

pub use policies::*;
pub use stats::*;
