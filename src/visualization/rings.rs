//! Orbit ring meshes, one per plane

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::core::VizConfig;
use crate::satellite::Constellation;

const RING_COLOR: Color = Color::srgb(0.533, 0.533, 0.533);

/// Component marker for orbit ring meshes
#[derive(Component, Copy, Clone, Debug)]
pub struct OrbitRing;

/// Rotation taking an XY-plane annulus into the orbit plane at `inclination`.
///
/// The annulus normal (+Z) ends up on the plane normal `(0, cos i, -sin i)`.
pub fn ring_rotation(inclination: f32) -> Quat {
    Quat::from_rotation_x(-(FRAC_PI_2 + inclination))
}

/// System to spawn a thin ring along every orbital plane
pub fn spawn_orbit_rings(
    config: Res<VizConfig>,
    constellation: Res<Constellation>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if constellation.planes.is_empty() {
        return;
    }

    let radius = constellation.radius as f32;
    let half_width = config.scene.ring_half_width;
    let mesh = meshes.add(
        Annulus::new(radius - half_width, radius + half_width)
            .mesh()
            .resolution(config.scene.ring_segments),
    );
    let material = materials.add(StandardMaterial {
        base_color: RING_COLOR,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for plane in &constellation.planes {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_rotation(ring_rotation(plane.inclination as f32)),
            OrbitRing,
            Name::new(format!("Orbit ring {}", plane.index)),
        ));
    }
}
