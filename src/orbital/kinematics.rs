//! Closed-form marker kinematics
//!
//! Positions are pure functions of time, plane and phase. There is no
//! integration step, so markers never drift off their circle.

use bevy::math::DVec3;
use std::f64::consts::TAU;

/// Inclination of the outermost plane fraction, in degrees.
pub const MAX_INCLINATION_DEG: f64 = 55.0;
/// Angular velocity of plane 0, radians per time unit.
pub const BASE_ANGULAR_VELOCITY: f64 = 0.5;
/// Angular velocity added per plane index.
pub const ANGULAR_VELOCITY_STEP: f64 = 0.05;

/// One orbital plane of the constellation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalPlane {
    pub index: u32,
    /// Radians, tilt of the plane about the X axis
    pub inclination: f64,
    /// Radians per time unit
    pub angular_velocity: f64,
}

impl OrbitalPlane {
    pub fn new(index: u32, plane_count: u32) -> Self {
        Self {
            index,
            inclination: plane_inclination(index, plane_count),
            angular_velocity: angular_velocity(index),
        }
    }

    /// Time for a marker in this plane to complete one revolution
    pub fn period(&self) -> f64 {
        TAU / self.angular_velocity
    }

    /// Position of a marker with `phase` at time `t`
    pub fn position(&self, t: f64, phase: f64, radius: f64) -> DVec3 {
        position_on_orbit(t * self.angular_velocity + phase, self.inclination, radius)
    }

    /// Unit normal of the orbit plane
    #[cfg(test)]
    pub fn normal(&self) -> DVec3 {
        DVec3::new(0.0, self.inclination.cos(), -self.inclination.sin())
    }
}

pub fn angular_velocity(plane: u32) -> f64 {
    BASE_ANGULAR_VELOCITY + plane as f64 * ANGULAR_VELOCITY_STEP
}

/// `(plane / plane_count) * 55°`, zero when there are no planes.
pub fn plane_inclination(plane: u32, plane_count: u32) -> f64 {
    if plane_count == 0 {
        return 0.0;
    }
    (plane as f64 / plane_count as f64) * MAX_INCLINATION_DEG.to_radians()
}

/// Starting angle of marker `slot` out of `slots` evenly spaced markers.
pub fn phase_offset(slot: u32, slots: u32) -> f64 {
    if slots == 0 {
        return 0.0;
    }
    (slot as f64 / slots as f64) * TAU
}

/// Point at `angle` along a circle of `radius` tilted by `inclination`.
///
/// At zero inclination the circle lies in the XZ plane.
pub fn position_on_orbit(angle: f64, inclination: f64, radius: f64) -> DVec3 {
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();
    DVec3::new(
        radius * cos_a,
        radius * sin_a * sin_i,
        radius * sin_a * cos_i,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!((a - b).length() < EPS, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn test_origin_of_time_is_on_x_axis() {
        let plane = OrbitalPlane::new(0, 3);
        assert_close(plane.position(0.0, 0.0, 5.5), DVec3::new(5.5, 0.0, 0.0));
    }

    #[test]
    fn test_distance_is_always_radius() {
        let radius = 5.5;
        for p in 0..3 {
            let plane = OrbitalPlane::new(p, 3);
            for s in 0..4 {
                let phase = phase_offset(s, 4);
                for step in 0..200 {
                    let t = step as f64 * 0.731 - 40.0;
                    let pos = plane.position(t, phase, radius);
                    assert!(
                        (pos.length() - radius).abs() < EPS,
                        "plane {p} slot {s} t {t}: |pos| = {}",
                        pos.length()
                    );
                }
            }
        }
    }

    #[test]
    fn test_position_is_periodic() {
        for p in 0..3 {
            let plane = OrbitalPlane::new(p, 3);
            let phase = phase_offset(1, 4);
            let t = 12.345;
            let a = plane.position(t, phase, 5.5);
            let b = plane.position(t + plane.period(), phase, 5.5);
            assert_close(a, b);
        }
    }

    #[test]
    fn test_inclinations_for_three_planes() {
        let degrees: Vec<f64> = (0..3)
            .map(|p| plane_inclination(p, 3).to_degrees())
            .collect();
        assert!(degrees[0].abs() < EPS);
        assert!((degrees[1] - 55.0 / 3.0).abs() < EPS);
        assert!((degrees[2] - 110.0 / 3.0).abs() < EPS);
        assert!((degrees[1] - 18.33).abs() < 0.01);
        assert!((degrees[2] - 36.67).abs() < 0.01);
    }

    #[test]
    fn test_angular_velocity_grows_per_plane() {
        assert_eq!(angular_velocity(0), 0.5);
        assert!((angular_velocity(1) - 0.55).abs() < EPS);
        assert!((angular_velocity(2) - 0.60).abs() < EPS);
    }

    #[test]
    fn test_zero_counts_do_not_divide_by_zero() {
        assert_eq!(plane_inclination(0, 0), 0.0);
        assert_eq!(phase_offset(0, 0), 0.0);
    }

    #[test]
    fn test_phase_offsets_are_evenly_spaced() {
        let phases: Vec<f64> = (0..4).map(|s| phase_offset(s, 4)).collect();
        for pair in phases.windows(2) {
            assert!((pair[1] - pair[0] - TAU / 4.0).abs() < EPS);
        }
    }

    #[test]
    fn test_positions_lie_in_plane() {
        let plane = OrbitalPlane::new(2, 3);
        let normal = plane.normal();
        for step in 0..50 {
            let pos = plane.position(step as f64 * 0.4, 0.3, 5.5);
            assert!(pos.dot(normal).abs() < EPS);
        }
    }

    #[test]
    fn test_quarter_turn_at_zero_inclination_points_along_z() {
        let pos = position_on_orbit(std::f64::consts::FRAC_PI_2, 0.0, 2.0);
        assert_close(pos, DVec3::new(0.0, 0.0, 2.0));
    }
}
