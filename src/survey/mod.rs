//! Survey stations in the two sensor conventions and the pipeline that turns either
//! into a trajectory.
//!
//! Angles are radians throughout. Raw readings in other units are converted once, when a
//! [`Survey`] is built from a [`SurveyConfig`].

pub mod azinc;
pub mod pitchroll;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::SurveyConfig;
use crate::error::{GeometryError, Result};
use crate::trajectory::Trajectory;

pub use azinc::convert_to_xyz;
pub use pitchroll::convert_to_az_inc;

/// Station expressed as azimuth (clockwise from north) and inclination (0 = straight down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzIncStation {
    pub measured_depth: f64,
    pub azimuth: f64,
    pub inclination: f64,
}

impl AzIncStation {
    pub fn new(measured_depth: f64, azimuth: f64, inclination: f64) -> AzIncStation {
        AzIncStation {
            measured_depth,
            azimuth,
            inclination,
        }
    }
}

/// Reading from a tool reporting its own roll and pitch plus a magnetic rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchRollStation {
    pub measured_depth: f64,
    pub roll: f64,
    pub pitch: f64,
    pub magnetic_rotation: f64,
}

impl PitchRollStation {
    pub fn new(
        measured_depth: f64,
        roll: f64,
        pitch: f64,
        magnetic_rotation: f64,
    ) -> PitchRollStation {
        PitchRollStation {
            measured_depth,
            roll,
            pitch,
            magnetic_rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "stations")]
pub enum Survey {
    AzInc(Vec<AzIncStation>),
    PitchRoll(Vec<PitchRollStation>),
}

impl Survey {
    /// Builds an azimuth/inclination survey from `(depth, azimuth, inclination)` readings.
    pub fn az_inc_from<I>(config: &SurveyConfig, readings: I) -> Survey
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let unit = config.angle_unit;
        Survey::AzInc(
            readings
                .into_iter()
                .map(|(md, az, inc)| {
                    AzIncStation::new(md, unit.to_radians(az), unit.to_radians(inc))
                })
                .collect(),
        )
    }

    /// Builds a pitch/roll survey from `(depth, roll, pitch, magnetic rotation)` readings.
    pub fn pitch_roll_from<I>(config: &SurveyConfig, readings: I) -> Survey
    where
        I: IntoIterator<Item = (f64, f64, f64, f64)>,
    {
        let unit = config.angle_unit;
        Survey::PitchRoll(
            readings
                .into_iter()
                .map(|(md, roll, pitch, rot)| {
                    PitchRollStation::new(
                        md,
                        unit.to_radians(roll),
                        unit.to_radians(pitch),
                        unit.to_radians(rot),
                    )
                })
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            Survey::AzInc(stations) => stations.len(),
            Survey::PitchRoll(stations) => stations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_az_inc(&self) -> Vec<AzIncStation> {
        match self {
            Survey::AzInc(stations) => stations.clone(),
            Survey::PitchRoll(stations) => convert_to_az_inc(stations),
        }
    }

    pub fn trajectory(&self) -> Trajectory {
        Trajectory::from_stations(&self.to_az_inc())
    }

    fn validate(&self) -> Result<()> {
        let mut previous: Option<f64> = None;
        for index in 0..self.len() {
            let fields = self.fields(index);
            for &(field, value) in fields.iter() {
                if !value.is_finite() {
                    return Err(GeometryError::NonFinite { index, field });
                }
            }

            let depth = fields[0].1;
            if depth < 0.0 {
                return Err(GeometryError::NegativeDepth { index, depth });
            }
            if let Some(previous) = previous {
                if depth < previous {
                    return Err(GeometryError::DepthOutOfOrder {
                        index,
                        previous,
                        current: depth,
                    });
                }
            }
            previous = Some(depth);
        }
        Ok(())
    }

    fn fields(&self, index: usize) -> Vec<(&'static str, f64)> {
        match self {
            Survey::AzInc(stations) => {
                let s = &stations[index];
                vec![
                    ("measuredDepth", s.measured_depth),
                    ("azimuth", s.azimuth),
                    ("inclination", s.inclination),
                ]
            }
            Survey::PitchRoll(stations) => {
                let s = &stations[index];
                vec![
                    ("measuredDepth", s.measured_depth),
                    ("roll", s.roll),
                    ("pitch", s.pitch),
                    ("magneticRotation", s.magnetic_rotation),
                ]
            }
        }
    }
}

/// Runs the survey through the converters, validating it first when `config.strict` is set.
pub fn compute_trajectory(survey: &Survey, config: &SurveyConfig) -> Result<Trajectory> {
    if config.strict {
        if let Err(err) = survey.validate() {
            warn!(
                "event=compute_trajectory module=survey status=rejected reason=\"{}\"",
                err
            );
            return Err(err);
        }
    }

    let trajectory = survey.trajectory();
    debug!(
        "event=compute_trajectory module=survey status=ok strict={} count={}",
        config.strict,
        trajectory.len()
    );
    Ok(trajectory)
}
