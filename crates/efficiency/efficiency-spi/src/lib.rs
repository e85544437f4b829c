//! Efficiency Scoring Service Provider Interface
//!
//! Defines the types shared by every part of the consumption engine:
//!
//! - [`SchoolProfile`]: static attributes used as normalization denominators
//! - [`Bill`]: one period's recorded electricity and water usage
//! - [`Metric`]: selects the electricity or water series out of a bill
//! - [`EfficiencyScores`]: normalized usage and bounded 0-100 scores
//! - [`ScoreCalculator`]: the scoring contract
//! - [`EfficiencyError`]: validation failures

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ScoreCalculator;
pub use error::{EfficiencyError, Result};
pub use model::{Bill, EfficiencyScores, Metric, SchoolProfile};
