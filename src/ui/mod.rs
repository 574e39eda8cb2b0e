//! User interface module
//!
//! This module spawns the text overlay, the mission recommendations panel and
//! the themed "Backend Health" link.

use bevy::prelude::*;
use bevy_feathers::FeathersPlugins;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;

pub mod link;
pub mod overlay;

pub use overlay::{setup_overlay, update_clock_label, update_mission_label};

use crate::mission::cycle_mission_type;
use crate::orbital::advance_orbit_clock;

/// Plugin for the overlay UI
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Feathers initializes `UiTheme` but does not populate it by default.
        let mut theme = UiTheme(create_dark_theme());
        theme.set_color("feathers.text.main", palette::LIGHT_GRAY_1);
        theme.set_color("feathers.focus", palette::ACCENT);
        theme.set_color("feathers.button.bg", Color::srgba(0.06, 0.12, 0.16, 0.9));
        theme.set_color(
            "feathers.button.bg.hover",
            Color::srgba(0.08, 0.2, 0.26, 0.95),
        );
        theme.set_color(
            "feathers.button.bg.pressed",
            Color::srgba(0.1, 0.26, 0.32, 0.95),
        );
        theme.set_color("feathers.button.txt", Color::WHITE);

        app.insert_resource(theme)
            .add_plugins(FeathersPlugins)
            .add_systems(Startup, setup_overlay)
            .add_systems(
                Update,
                (
                    update_clock_label.after(advance_orbit_clock),
                    update_mission_label.after(cycle_mission_type),
                ),
            );
    }
}
