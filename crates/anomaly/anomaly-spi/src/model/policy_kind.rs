//! Named anomaly policies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two anomaly rules used by the analysis endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// Distance from the historical mean in population standard deviations.
    ZScore,
    /// Latest value against a multiple of the mean of the whole series.
    Ratio,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::ZScore => f.write_str("z_score"),
            PolicyKind::Ratio => f.write_str("ratio"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&PolicyKind::ZScore).unwrap(), "\"z_score\"");
        assert_eq!(
            serde_json::from_str::<PolicyKind>("\"ratio\"").unwrap(),
            PolicyKind::Ratio
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(PolicyKind::ZScore.to_string(), "z_score");
        assert_eq!(PolicyKind::Ratio.to_string(), "ratio");
    }
}
