//! Error types for efficiency scoring.

mod efficiency_error;

pub use efficiency_error::{EfficiencyError, Result};
