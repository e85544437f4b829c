//! Integration tests for efficiency scoring

use efficiency_facade::{
    compute_scores, Bill, EfficiencyError, SaturationScorer, SchoolProfile, ScoreCalculator,
    ScoringConfig,
};
use proptest::prelude::*;

#[test]
fn test_scores_through_trait_object() {
    let calculator: Box<dyn ScoreCalculator> = Box::new(SaturationScorer::default());
    let school = SchoolProfile::new(50, 250.0);
    let scores = calculator
        .compute(&Bill::new("2024-05", 1250.0, 2500.0), &school)
        .unwrap();

    // 25 kWh/student -> 50, 50 L/student -> 50
    assert!((scores.electricity_score - 50.0).abs() < 0.001);
    assert!((scores.water_score - 50.0).abs() < 0.001);
    assert!((scores.combined_score - 50.0).abs() < 0.001);
}

#[test]
fn test_combined_is_unweighted_average() {
    let school = SchoolProfile::new(10, 100.0);
    let scores = compute_scores(&Bill::new("2024-05", 100.0, 0.0), &school).unwrap();

    // 10 kWh/student -> 80, 0 L -> 100
    assert!((scores.combined_score - 90.0).abs() < 0.001);
}

#[test]
fn test_validation_errors_surface() {
    let bill = Bill::new("2024-05", 10.0, 10.0);
    for school in [SchoolProfile::new(0, 100.0), SchoolProfile::new(10, 0.0)] {
        match compute_scores(&bill, &school) {
            Err(EfficiencyError::Validation { .. }) => {}
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

#[test]
fn test_costs_do_not_affect_scores() {
    let school = SchoolProfile::new(10, 100.0);
    let plain = compute_scores(&Bill::new("2024-05", 100.0, 300.0), &school).unwrap();
    let billed = compute_scores(
        &Bill::new("2024-05", 100.0, 300.0).with_costs(9999.0, 42.0),
        &school,
    )
    .unwrap();
    assert_eq!(plain, billed);
}

#[test]
fn test_stricter_config_lowers_scores() {
    let school = SchoolProfile::new(10, 100.0);
    let bill = Bill::new("2024-05", 100.0, 300.0);
    let default = compute_scores(&bill, &school).unwrap();
    let strict = SaturationScorer::new(ScoringConfig::new(20.0, 40.0))
        .unwrap()
        .compute(&bill, &school)
        .unwrap();
    assert!(strict.electricity_score < default.electricity_score);
    assert!(strict.water_score < default.water_score);
}

proptest! {
    #[test]
    fn prop_scores_stay_within_bounds(
        students in 1u32..10_000,
        area in 0.01f64..1.0e6,
        kwh in 0.0f64..1.0e9,
        liters in 0.0f64..1.0e9,
    ) {
        let scores = compute_scores(
            &Bill::new("2024-01", kwh, liters),
            &SchoolProfile::new(students, area),
        ).unwrap();

        prop_assert!((0.0..=100.0).contains(&scores.electricity_score));
        prop_assert!((0.0..=100.0).contains(&scores.water_score));
        prop_assert!((0.0..=100.0).contains(&scores.combined_score));
    }
}
