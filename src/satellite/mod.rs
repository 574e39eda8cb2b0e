//! Satellite marker module
//!
//! This module owns the marker records of the constellation and the systems
//! that move their render entities every frame.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use resources::Constellation;
pub use systems::{apply_marker_transforms, spawn_constellation, update_marker_positions};

use crate::core::VizConfig;
use crate::orbital::advance_orbit_clock;

/// Plugin for marker spawning and propagation
pub struct SatellitePlugin;

impl Plugin for SatellitePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VizConfig>();
        let constellation = Constellation::new(&app.world().resource::<VizConfig>().constellation);

        app.insert_resource(constellation)
            .add_systems(Startup, spawn_constellation)
            .add_systems(
                Update,
                (update_marker_positions, apply_marker_transforms)
                    .chain()
                    .after(advance_orbit_clock),
            );
    }
}
