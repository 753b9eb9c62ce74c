use log::debug;

use super::AzIncStation;
use crate::trajectory::TrajectoryPoint;

/// Converts ordered azimuth/inclination stations into cumulative offsets with the
/// minimum-curvature method. The first point is always the origin.
pub fn convert_to_xyz(stations: &[AzIncStation]) -> Vec<TrajectoryPoint> {
    let mut points = Vec::with_capacity(stations.len());
    if let Some(first) = stations.first() {
        let mut current = TrajectoryPoint::ORIGIN;
        points.push(current);

        let mut previous = first;
        for station in &stations[1..] {
            current = current + segment(previous, station);
            points.push(current);
            previous = station;
        }
    }

    debug!(
        "event=convert_to_xyz module=survey.azinc count={}",
        stations.len()
    );
    points
}

/// Offset between two consecutive stations along the circular arc joining them.
pub fn segment(from: &AzIncStation, to: &AzIncStation) -> TrajectoryPoint {
    let delta_md = to.measured_depth - from.measured_depth;

    let (sin_az1, cos_az1) = from.azimuth.sin_cos();
    let (sin_az2, cos_az2) = to.azimuth.sin_cos();
    let (sin_inc1, cos_inc1) = from.inclination.sin_cos();
    let (sin_inc2, cos_inc2) = to.inclination.sin_cos();

    let half = delta_md / 2.0 * ratio_factor(dogleg(from, to));

    TrajectoryPoint {
        x: half * (sin_inc1 * sin_az1 + sin_inc2 * sin_az2),
        y: half * (sin_inc1 * cos_az1 + sin_inc2 * cos_az2),
        z: half * (cos_inc1 + cos_inc2),
    }
}

/// Angle between the borehole directions at two stations.
pub fn dogleg(from: &AzIncStation, to: &AzIncStation) -> f64 {
    let cos_beta = from.inclination.cos() * to.inclination.cos()
        + from.inclination.sin() * to.inclination.sin() * (to.azimuth - from.azimuth).cos();
    cos_beta.clamp(-1.0, 1.0).acos()
}

fn ratio_factor(beta: f64) -> f64 {
    if beta > 0.0 {
        2.0 / beta * (beta / 2.0).tan()
    } else {
        1.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn straight_segment_has_unit_ratio() {
        assert_eq!(ratio_factor(0.0), 1.0);
        assert_eq!(ratio_factor(f64::NAN), 1.0);
        assert_approx_eq!(ratio_factor(1e-6), 1.0, 1e-9);
        assert!(ratio_factor(0.5) > 1.0);
    }

    #[test]
    fn vertical_segment_only_goes_down() {
        let from = AzIncStation::new(10.0, 0.0, 0.0);
        let to = AzIncStation::new(25.0, 0.0, 0.0);
        let offset = segment(&from, &to);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);
        assert_approx_eq!(offset.z, 15.0);
    }

    #[test]
    fn dogleg_between_vertical_and_horizontal() {
        let from = AzIncStation::new(0.0, 0.0, 0.0);
        let to = AzIncStation::new(10.0, 1.0, std::f64::consts::FRAC_PI_2);
        assert_approx_eq!(dogleg(&from, &to), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn quarter_circle_build_up() {
        // a 90 degree build over a quarter circle of radius r lands at (r, r) north/down
        let r = 100.0;
        let length = std::f64::consts::FRAC_PI_2 * r;
        let from = AzIncStation::new(0.0, 0.0, 0.0);
        let to = AzIncStation::new(length, 0.0, std::f64::consts::FRAC_PI_2);
        let offset = segment(&from, &to);
        assert_approx_eq!(offset.x, 0.0);
        assert_approx_eq!(offset.y, r, 1e-9);
        assert_approx_eq!(offset.z, r, 1e-9);
    }
}
