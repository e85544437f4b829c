//! Efficiency Scoring Facade
//!
//! Unified re-exports for the efficiency scoring module:
//! - Models, `ScoreCalculator` and `EfficiencyError` from SPI
//! - `ScoringConfig` and the saturation constants from API
//! - `SaturationScorer` and `compute_scores` from Core

// Re-export everything from SPI
pub use efficiency_spi::*;

// Re-export everything from API
pub use efficiency_api::*;

// Re-export everything from Core
pub use efficiency_core::*;
