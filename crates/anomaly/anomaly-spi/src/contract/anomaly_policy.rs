//! Anomaly policy trait definition.

use crate::model::{AnomalyVerdict, PolicyKind};

/// Anomaly policy trait.
///
/// A policy compares one reading against a single metric's series and
/// decides whether it is unusual. Policies are stateless: each call reads
/// only its arguments. Not having enough history is a normal outcome and
/// yields a non-anomalous verdict.
pub trait AnomalyPolicy: Send + Sync {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// Evaluate `value` against `series`.
    fn evaluate(&self, value: f64, series: &[f64]) -> AnomalyVerdict;

    /// Shorthand for `evaluate(value, series).is_anomaly`.
    fn is_anomaly(&self, value: f64, series: &[f64]) -> bool {
        self.evaluate(value, series).is_anomaly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flags anything above a fixed ceiling.
    struct CeilingPolicy(f64);

    impl AnomalyPolicy for CeilingPolicy {
        fn kind(&self) -> PolicyKind {
            PolicyKind::Ratio
        }

        fn evaluate(&self, value: f64, series: &[f64]) -> AnomalyVerdict {
            if series.is_empty() {
                return AnomalyVerdict::insufficient(self.0);
            }
            AnomalyVerdict::new(value > self.0, Some(value), self.0)
        }
    }

    #[test]
    fn test_is_anomaly_delegates_to_evaluate() {
        let policy = CeilingPolicy(10.0);
        assert!(policy.is_anomaly(11.0, &[1.0]));
        assert!(!policy.is_anomaly(9.0, &[1.0]));
        assert!(!policy.is_anomaly(11.0, &[]));
    }

    #[test]
    fn test_policy_is_object_safe() {
        let policies: Vec<Box<dyn AnomalyPolicy>> = vec![Box::new(CeilingPolicy(1.0))];
        assert_eq!(policies[0].kind(), PolicyKind::Ratio);
    }
}
