//! Scene lighting

use bevy::prelude::*;

use crate::core::VizConfig;

/// Marker component for the sun directional light
#[derive(Component)]
pub struct SunLight;

/// Spawn the single directional light, aimed at the planet
pub fn spawn_sun_light(config: Res<VizConfig>, mut commands: Commands) {
    let [x, y, z] = config.scene.light_position;
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: config.scene.light_illuminance,
            ..default()
        },
        SunLight,
        // Distance doesn't affect a DirectionalLight, only its direction does.
        Transform::from_xyz(x, y, z).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
    ));
}
