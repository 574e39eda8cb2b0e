//! Satellite systems for spawning and per-frame position updates

use crate::core::VizConfig;
use crate::orbital::OrbitClock;
use crate::satellite::components::{MarkerIndex, Satellite};
use crate::satellite::resources::Constellation;
use bevy::prelude::*;

/// System to spawn one render entity per marker record
pub fn spawn_constellation(
    config: Res<VizConfig>,
    mut constellation: ResMut<Constellation>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if constellation.is_empty() {
        warn!(
            "Constellation has no markers ({} planes x {} per plane)",
            config.constellation.planes, config.constellation.sats_per_plane
        );
        return;
    }

    // All markers share a single mesh and material.
    let mesh = meshes.add(Sphere::new(config.scene.marker_radius).mesh().uv(32, 16));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    for (index, marker) in constellation.markers.iter_mut().enumerate() {
        let entity = commands
            .spawn((
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Satellite,
                MarkerIndex(index),
                Transform::from_translation(marker.position.as_vec3()),
                Name::new(format!("Marker {index} (plane {})", marker.plane)),
            ))
            .id();
        marker.entity = Some(entity);
    }

    info!(
        "Spawned {} markers across {} planes at radius {}",
        constellation.len(),
        constellation.planes.len(),
        constellation.radius
    );
}

/// System to recompute marker positions from the orbit clock
pub fn update_marker_positions(clock: Res<OrbitClock>, mut constellation: ResMut<Constellation>) {
    constellation.update(clock.elapsed());
}

/// System to copy marker positions onto their render transforms
pub fn apply_marker_transforms(
    constellation: Res<Constellation>,
    mut q: Query<(&MarkerIndex, &mut Transform), With<Satellite>>,
) {
    for (index, mut transform) in q.iter_mut() {
        if let Some(marker) = constellation.markers.get(index.0) {
            transform.translation = marker.position.as_vec3();
        }
    }
}
