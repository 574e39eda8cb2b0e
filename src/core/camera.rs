//! Main camera construction

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::core::config::CameraConfig;

/// Marker for the scene camera driven by PanOrbit and the resize handler
#[derive(Component)]
pub struct MainCamera;

/// Perspective projection for the configured FOV and clip planes.
pub fn perspective_projection(config: &CameraConfig, aspect_ratio: f32) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: config.fov_degrees.to_radians(),
        aspect_ratio,
        near: config.near,
        far: config.far,
        ..default()
    }
}

/// PanOrbit state that places the camera on +Z at the configured distance.
pub fn initial_pan_orbit(config: &CameraConfig) -> PanOrbitCamera {
    PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(config.distance),
        yaw: Some(0.0),
        pitch: Some(0.0),
        // Keep the user from zooming inside the planet or past the far plane.
        zoom_lower_limit: 2.5,
        zoom_upper_limit: Some(config.far * 0.5),
        force_update: true,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_uses_config() {
        let config = CameraConfig::default();
        let projection = perspective_projection(&config, 16.0 / 9.0);
        assert!((projection.fov - 60.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(projection.aspect_ratio, 16.0 / 9.0);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }

    #[test]
    fn test_pan_orbit_starts_on_z_axis() {
        let pan_orbit = initial_pan_orbit(&CameraConfig::default());
        assert_eq!(pan_orbit.radius, Some(8.0));
        assert_eq!(pan_orbit.yaw, Some(0.0));
        assert_eq!(pan_orbit.pitch, Some(0.0));
        assert_eq!(pan_orbit.focus, Vec3::ZERO);
    }
}
