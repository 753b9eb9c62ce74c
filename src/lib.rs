//! Borehole survey conversions.
//!
//! Pitch/roll tool readings become azimuth/inclination stations, and azimuth/inclination
//! stations become a trajectory of `(east, north, depth)` offsets via the minimum-curvature
//! method. Everything here is a pure function over immutable values.

#[cfg(test)]
#[macro_use]
extern crate assert_approx_eq;

pub mod angle;
pub mod config;
pub mod error;
pub mod survey;
pub mod trajectory;

pub use angle::AngleUnit;
pub use config::SurveyConfig;
pub use error::{GeometryError, Result};
pub use survey::{
    compute_trajectory, convert_to_az_inc, convert_to_xyz, AzIncStation, PitchRollStation, Survey,
};
pub use trajectory::{Trajectory, TrajectoryPoint, TrajectoryStation};
