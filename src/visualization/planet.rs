use bevy::prelude::*;

use crate::core::VizConfig;

/// Component marker for the planet sphere
#[derive(Component)]
pub struct Planet;

pub fn planet_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgb_u8(0x22, 0x44, 0x88),
        emissive: Color::srgb_u8(0x00, 0x11, 0x22).to_linear(),
        perceptual_roughness: 0.7,
        ..default()
    }
}

/// Spawn the planet at the origin
pub fn spawn_planet(
    config: Res<VizConfig>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let scene = &config.scene;
    let segments = scene.planet_segments.max(3);
    let mesh = Sphere::new(scene.planet_radius)
        .mesh()
        .uv(segments, segments);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(planet_material())),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Planet,
        Name::new("Planet"),
    ));
}
