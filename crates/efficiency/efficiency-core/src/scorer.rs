//! Saturation scorer.
//!
//! Usage is normalized by student count and by area. The score falls
//! linearly from 100 at zero usage to 0 at the saturation constant:
//!
//! ```text
//! score = clamp(100 - per_student / saturation * 100, 0, 100)
//! ```

use efficiency_api::ScoringConfig;
use efficiency_spi::{Bill, EfficiencyScores, Metric, Result, SchoolProfile, ScoreCalculator};

/// Map a per-student usage onto the bounded 0-100 score curve.
///
/// A NaN input scores 0 so the result is always inside the bounds.
pub fn saturation_score(per_student: f64, saturation: f64) -> f64 {
    let raw = 100.0 - (per_student / saturation * 100.0);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

/// Score calculator parameterized by saturation constants.
#[derive(Debug, Clone, Default)]
pub struct SaturationScorer {
    config: ScoringConfig,
}

impl SaturationScorer {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

impl ScoreCalculator for SaturationScorer {
    fn compute(&self, bill: &Bill, school: &SchoolProfile) -> Result<EfficiencyScores> {
        school.validate()?;
        bill.validate()?;

        let students = f64::from(school.students);
        let per_student_electricity = bill.electricity_kwh / students;
        let per_area_electricity = bill.electricity_kwh / school.area;
        let per_student_water = bill.water_liters / students;
        let per_area_water = bill.water_liters / school.area;

        let electricity_score = saturation_score(
            per_student_electricity,
            self.config.saturation(Metric::Electricity),
        );
        let water_score =
            saturation_score(per_student_water, self.config.saturation(Metric::Water));

        Ok(EfficiencyScores {
            per_student_electricity,
            per_area_electricity,
            per_student_water,
            per_area_water,
            electricity_score,
            water_score,
            combined_score: (electricity_score + water_score) / 2.0,
        })
    }
}

/// Score a bill with the default saturation constants.
pub fn compute_scores(bill: &Bill, school: &SchoolProfile) -> Result<EfficiencyScores> {
    SaturationScorer::default().compute(bill, school)
}

#[cfg(test)]
mod tests {
    use super::*;
    use efficiency_spi::EfficiencyError;

    #[test]
    fn test_saturation_score_bounds() {
        assert_eq!(saturation_score(0.0, 50.0), 100.0);
        assert_eq!(saturation_score(25.0, 50.0), 50.0);
        assert_eq!(saturation_score(50.0, 50.0), 0.0);
        assert_eq!(saturation_score(60.0, 50.0), 0.0);
        assert_eq!(saturation_score(f64::NAN, 50.0), 0.0);
    }

    #[test]
    fn test_overconsuming_school_scores_zero() {
        let school = SchoolProfile::new(100, 500.0);
        let scores = compute_scores(&Bill::new("2024-01", 6000.0, 0.0), &school).unwrap();

        assert!((scores.per_student_electricity - 60.0).abs() < 1e-9);
        assert!((scores.per_area_electricity - 12.0).abs() < 1e-9);
        assert_eq!(scores.electricity_score, 0.0);
        assert_eq!(scores.water_score, 100.0);
        assert_eq!(scores.combined_score, 50.0);
    }

    #[test]
    fn test_mid_range_scores() {
        let school = SchoolProfile::new(200, 1000.0);
        // 20 kWh and 50 L per student
        let scores = compute_scores(&Bill::new("2024-01", 4000.0, 10000.0), &school).unwrap();

        assert!((scores.electricity_score - 60.0).abs() < 1e-9);
        assert!((scores.water_score - 50.0).abs() < 1e-9);
        assert!((scores.combined_score - 55.0).abs() < 1e-9);
        assert!((scores.per_area_water - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_students_is_validation_error() {
        let err = compute_scores(&Bill::new("2024-01", 1.0, 1.0), &SchoolProfile::new(0, 10.0))
            .unwrap_err();
        assert!(matches!(err, EfficiencyError::Validation { ref field, .. } if field == "students"));
    }

    #[test]
    fn test_zero_area_is_validation_error() {
        let err = compute_scores(&Bill::new("2024-01", 1.0, 1.0), &SchoolProfile::new(10, 0.0))
            .unwrap_err();
        assert!(matches!(err, EfficiencyError::Validation { ref field, .. } if field == "area"));
    }

    #[test]
    fn test_custom_saturation() {
        let scorer = SaturationScorer::new(ScoringConfig::new(10.0, 10.0)).unwrap();
        let scores = scorer
            .compute(&Bill::new("2024-01", 50.0, 50.0), &SchoolProfile::new(10, 1.0))
            .unwrap();
        assert!((scores.electricity_score - 50.0).abs() < 1e-9);
        assert!((scores.water_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(SaturationScorer::new(ScoringConfig::new(50.0, -1.0)).is_err());
    }
}
