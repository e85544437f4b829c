//! Contract definitions for efficiency scoring.

mod score_calculator;

pub use score_calculator::ScoreCalculator;
