//! Visualization module
//!
//! This module builds the static scene: the planet, its light, and one ring
//! per orbital plane.

use bevy::prelude::*;

pub mod lighting;
pub mod planet;
pub mod rings;

pub use lighting::spawn_sun_light;
pub use planet::spawn_planet;
pub use rings::spawn_orbit_rings;

/// Plugin for static scene geometry
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_planet, spawn_sun_light, spawn_orbit_rings));
    }
}
