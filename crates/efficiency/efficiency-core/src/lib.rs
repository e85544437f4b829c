//! Efficiency Scoring Core
//!
//! Implementation of the per-student saturation score.

mod scorer;

pub use scorer::*;

// Re-export from SPI
pub use efficiency_spi::{Bill, EfficiencyError, EfficiencyScores, Metric, Result, SchoolProfile, ScoreCalculator};
