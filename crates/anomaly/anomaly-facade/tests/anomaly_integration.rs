//! Integration tests for anomaly policies

use anomaly_facade::{
    build_policy, is_anomaly_ratio, is_anomaly_zscore, AnomalyPolicy, PolicyConfig, PolicyKind,
    RatioPolicy, ZScoreConfig, ZScorePolicy,
};

fn steady_kwh() -> Vec<f64> {
    vec![1000.0, 1040.0, 980.0, 1010.0, 1030.0, 990.0]
}

#[test]
fn test_zscore_spike_flagged() {
    let mut history = steady_kwh();
    history.push(2500.0);
    assert!(is_anomaly_zscore(2500.0, &history));
}

#[test]
fn test_zscore_ordinary_reading_not_flagged() {
    let mut history = steady_kwh();
    history.push(1020.0);
    assert!(!is_anomaly_zscore(1020.0, &history));
}

#[test]
fn test_zscore_short_history_never_flags() {
    for value in [0.0, 1.0, 1.0e12, -1.0e12] {
        assert!(!is_anomaly_zscore(value, &[10.0, 10.0]));
    }
}

#[test]
fn test_zscore_drop_also_flagged() {
    // Symmetric: unusually low usage is an anomaly too
    let history = steady_kwh();
    assert!(is_anomaly_zscore(100.0, &history));
}

#[test]
fn test_ratio_policy_only_flags_high_usage() {
    let mut series = steady_kwh();
    series.push(10.0);
    assert!(!is_anomaly_ratio(10.0, &series));

    let mut series = steady_kwh();
    series.push(9000.0);
    assert!(is_anomaly_ratio(9000.0, &series));
}

#[test]
fn test_policies_disagree_on_moderate_spike() {
    // A moderate spike against a tight history is a z-score anomaly but
    // stays under twice the mean
    let mut series = steady_kwh();
    series.push(1300.0);
    assert!(is_anomaly_zscore(1300.0, &series));
    assert!(!is_anomaly_ratio(1300.0, &series));
}

#[test]
fn test_policies_are_interchangeable() {
    let policies: Vec<Box<dyn AnomalyPolicy>> = vec![
        Box::new(ZScorePolicy::default()),
        Box::new(RatioPolicy::default()),
    ];
    let series = [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 21.0];
    for policy in &policies {
        assert!(policy.is_anomaly(21.0, &series), "{} missed spike", policy.kind());
    }
}

#[test]
fn test_configured_zscore_policy() {
    let policy = build_policy(PolicyConfig::ZScore(
        ZScoreConfig::new(1.0).with_min_history(2),
    ))
    .unwrap();
    assert_eq!(policy.kind(), PolicyKind::ZScore);
    // mean 15, std 5 -> z = 1.2
    assert!(policy.is_anomaly(21.0, &[10.0, 20.0]));
}
