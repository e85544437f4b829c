//! Score calculator trait definition.

use crate::error::Result;
use crate::model::{Bill, EfficiencyScores, SchoolProfile};

/// Derives normalized consumption and efficiency scores from a bill.
///
/// Implementations must be pure: no I/O, no randomness, and the same
/// `(bill, school)` pair always yields the same scores.
pub trait ScoreCalculator: Send + Sync {
    /// Score a single bill against the school it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`EfficiencyError::Validation`](crate::EfficiencyError::Validation)
    /// when the school has no students, a non-positive area, or the bill
    /// carries negative or non-finite usage.
    fn compute(&self, bill: &Bill, school: &SchoolProfile) -> Result<EfficiencyScores>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EfficiencyError;

    /// Scores everything as perfectly efficient, but still validates the profile.
    struct FlatCalculator;

    impl ScoreCalculator for FlatCalculator {
        fn compute(&self, bill: &Bill, school: &SchoolProfile) -> Result<EfficiencyScores> {
            school.validate()?;
            let students = school.students as f64;
            Ok(EfficiencyScores {
                per_student_electricity: bill.electricity_kwh / students,
                per_area_electricity: bill.electricity_kwh / school.area,
                per_student_water: bill.water_liters / students,
                per_area_water: bill.water_liters / school.area,
                electricity_score: 100.0,
                water_score: 100.0,
                combined_score: 100.0,
            })
        }
    }

    #[test]
    fn test_trait_is_object_safe() {
        let calculator: Box<dyn ScoreCalculator> = Box::new(FlatCalculator);
        let scores = calculator
            .compute(&Bill::new("2024-01", 100.0, 200.0), &SchoolProfile::new(10, 50.0))
            .unwrap();
        assert_eq!(scores.per_student_electricity, 10.0);
        assert_eq!(scores.per_area_water, 4.0);
    }

    #[test]
    fn test_trait_propagates_validation() {
        let calculator = FlatCalculator;
        let err = calculator
            .compute(&Bill::new("2024-01", 1.0, 1.0), &SchoolProfile::new(0, 50.0))
            .unwrap_err();
        assert!(matches!(err, EfficiencyError::Validation { .. }));
    }
}
