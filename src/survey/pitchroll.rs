use log::debug;

use super::{AzIncStation, PitchRollStation};
use crate::angle;

/// Converts pitch/roll readings into azimuth/inclination stations, keeping depth and order.
pub fn convert_to_az_inc(stations: &[PitchRollStation]) -> Vec<AzIncStation> {
    let converted: Vec<AzIncStation> = stations.iter().map(|s| s.to_az_inc()).collect();
    debug!(
        "event=convert_to_az_inc module=survey.pitchroll count={}",
        converted.len()
    );
    converted
}

impl PitchRollStation {
    /// Rotates the tool axis by roll (about north), pitch (about east) and magnetic
    /// rotation (about the vertical), then reads the borehole direction off the result.
    pub fn to_az_inc(self) -> AzIncStation {
        let (sin_roll, cos_roll) = self.roll.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_rot, cos_rot) = self.magnetic_rotation.sin_cos();

        let tool_north = cos_roll * sin_pitch;
        let tool_east = -sin_roll;
        let down = cos_roll * cos_pitch;

        let north = tool_north * cos_rot - tool_east * sin_rot;
        let east = tool_north * sin_rot + tool_east * cos_rot;

        let (azimuth, inclination) = angle::az_inc(north, east, down);
        AzIncStation {
            measured_depth: self.measured_depth,
            azimuth,
            inclination,
        }
    }
}
