use serde::{Deserialize, Serialize};

pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Unit in which raw survey angles are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value.to_radians(),
            AngleUnit::Radians => value,
        }
    }
}

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Degrees
    }
}

/// Wraps an angle into `[0, 2π)`.
pub fn normalize_azimuth(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Unit tangent of the borehole as `(north, east, down)`.
pub fn direction(azimuth: f64, inclination: f64) -> (f64, f64, f64) {
    let (sin_az, cos_az) = azimuth.sin_cos();
    let (sin_inc, cos_inc) = inclination.sin_cos();
    (sin_inc * cos_az, sin_inc * sin_az, cos_inc)
}

/// Azimuth and inclination of a `(north, east, down)` vector.
pub fn az_inc(north: f64, east: f64, down: f64) -> (f64, f64) {
    let length = (north * north + east * east + down * down).sqrt();
    let inclination = (down / length).clamp(-1.0, 1.0).acos();
    let azimuth = normalize_azimuth(east.atan2(north));
    (azimuth, inclination)
}
