//! School profile.

use serde::{Deserialize, Serialize};

use crate::error::{EfficiencyError, Result};

/// Static attributes of a school, used only as normalization denominators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchoolProfile {
    /// Enrolled students.
    pub students: u32,
    /// Built area in square meters.
    pub area: f64,
}

impl SchoolProfile {
    pub fn new(students: u32, area: f64) -> Self {
        Self { students, area }
    }

    /// Reject profiles that would divide by zero or yield NaN.
    pub fn validate(&self) -> Result<()> {
        if self.students == 0 {
            return Err(EfficiencyError::validation(
                "students",
                "must be greater than zero",
            ));
        }
        if !self.area.is_finite() || self.area <= 0.0 {
            return Err(EfficiencyError::validation(
                "area",
                format!("must be a positive finite number, got {}", self.area),
            ));
        }
        Ok(())
    }
}
