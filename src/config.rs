use serde::{Deserialize, Serialize};

use crate::angle::AngleUnit;

/// Settings applied when turning raw readings into a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurveyConfig {
    /// Unit of the angles in raw readings.
    pub angle_unit: AngleUnit,
    /// Reject non-finite values, negative depths and unordered depths before converting.
    pub strict: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        SurveyConfig {
            angle_unit: AngleUnit::Degrees,
            strict: true,
        }
    }
}
