use serde::{Deserialize, Serialize};

use crate::angle;
use crate::survey::azinc;
use crate::survey::AzIncStation;

/// Offset from the borehole's surface origin: `x` east, `y` north, `z` depth (down positive).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectoryPoint {
    pub const ORIGIN: TrajectoryPoint = TrajectoryPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(pos: (f64, f64, f64)) -> TrajectoryPoint {
        TrajectoryPoint {
            x: pos.0,
            y: pos.1,
            z: pos.2,
        }
    }

    /// Distance from the vertical through the origin.
    pub fn horizontal_offset(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Add for TrajectoryPoint {
    type Output = TrajectoryPoint;
    fn add(self, other: TrajectoryPoint) -> TrajectoryPoint {
        TrajectoryPoint {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for TrajectoryPoint {
    type Output = TrajectoryPoint;
    fn sub(self, other: TrajectoryPoint) -> TrajectoryPoint {
        TrajectoryPoint {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrajectoryStation {
    pub measured_depth: f64,
    pub azimuth: f64,
    pub inclination: f64,
    pub point: TrajectoryPoint,
}

impl TrajectoryStation {
    fn orientation(&self) -> AzIncStation {
        AzIncStation::new(self.measured_depth, self.azimuth, self.inclination)
    }
}

/// Computed borehole path, one entry per survey station.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Trajectory {
    stations: Vec<TrajectoryStation>,
}

impl Trajectory {
    pub fn from_stations(stations: &[AzIncStation]) -> Trajectory {
        let points = azinc::convert_to_xyz(stations);
        Trajectory {
            stations: stations
                .iter()
                .zip(points)
                .map(|(s, point)| TrajectoryStation {
                    measured_depth: s.measured_depth,
                    azimuth: s.azimuth,
                    inclination: s.inclination,
                    point,
                })
                .collect(),
        }
    }

    pub fn stations(&self) -> &[TrajectoryStation] {
        &self.stations
    }

    pub fn points(&self) -> Vec<TrajectoryPoint> {
        self.stations.iter().map(|s| s.point).collect()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Position at a measured depth within the surveyed interval, following the
    /// circular arc between the bracketing stations.
    pub fn position_at(&self, measured_depth: f64) -> Option<TrajectoryPoint> {
        let first = self.stations.first()?;
        let last = self.stations.last()?;
        if !(measured_depth >= first.measured_depth && measured_depth <= last.measured_depth) {
            return None;
        }

        // first station at or below the requested depth
        let upper = self
            .stations
            .iter()
            .position(|s| s.measured_depth >= measured_depth)?;
        let to = &self.stations[upper];
        if to.measured_depth == measured_depth || upper == 0 {
            return Some(to.point);
        }
        let from = &self.stations[upper - 1];

        let fraction =
            (measured_depth - from.measured_depth) / (to.measured_depth - from.measured_depth);
        let (azimuth, inclination) = tangent_along_arc(from, to, fraction);
        let partial = AzIncStation::new(measured_depth, azimuth, inclination);
        Some(from.point + azinc::segment(&from.orientation(), &partial))
    }

    /// Vertical depth below the origin at a measured depth.
    pub fn true_vertical_depth(&self, measured_depth: f64) -> Option<f64> {
        self.position_at(measured_depth).map(|p| p.z)
    }
}

/// Spherical interpolation of the borehole direction between two stations.
fn tangent_along_arc(
    from: &TrajectoryStation,
    to: &TrajectoryStation,
    fraction: f64,
) -> (f64, f64) {
    let beta = azinc::dogleg(&from.orientation(), &to.orientation());
    if !(beta > 0.0) {
        return (from.azimuth, from.inclination);
    }

    let start = angle::direction(from.azimuth, from.inclination);
    let end = angle::direction(to.azimuth, to.inclination);
    let w_start = ((1.0 - fraction) * beta).sin() / beta.sin();
    let w_end = (fraction * beta).sin() / beta.sin();
    angle::az_inc(
        w_start * start.0 + w_end * end.0,
        w_start * start.1 + w_end * end.1,
        w_start * start.2 + w_end * end.2,
    )
}
