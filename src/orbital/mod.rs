//! Orbital motion module
//!
//! This module holds the closed-form marker kinematics and the frame-stepped
//! clock that drives the animation.

use bevy::prelude::*;

pub mod clock;
pub mod kinematics;

pub use clock::{OrbitClock, advance_orbit_clock, stop_orbit_clock_on_exit, toggle_orbit_clock};
pub use kinematics::{OrbitalPlane, phase_offset};

use crate::core::VizConfig;

/// Plugin for the animation clock
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VizConfig>();
        let step = app.world().resource::<VizConfig>().constellation.time_step;

        app.insert_resource(OrbitClock::new(step))
            .add_systems(Update, (toggle_orbit_clock, advance_orbit_clock).chain())
            .add_systems(Last, stop_orbit_clock_on_exit);
    }
}
