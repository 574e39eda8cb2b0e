use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, PrimaryWindow, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod core;
mod mission;
mod orbital;
mod satellite;
mod ui;
mod visualization;

use crate::core::{
    MainCamera, VizConfig, ViewportPlugin, ViewportSize, initial_pan_orbit, load_config,
    perspective_projection,
};
use mission::MissionPlugin;
use orbital::OrbitalPlugin;
use satellite::SatellitePlugin;
use ui::{UiPlugin, overlay::TITLE};
use visualization::VisualizationPlugin;

// Setup camera sized to the current window
pub fn setup(
    mut commands: Commands,
    config: Res<VizConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
) {
    let aspect_ratio = match windows.single() {
        Ok(window) => {
            *viewport = ViewportSize::new(window.width(), window.height());
            viewport.aspect_ratio()
        }
        Err(_) => {
            warn!("No primary window; assuming a square viewport");
            1.0
        }
    };

    let camera = &config.camera;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(perspective_projection(camera, aspect_ratio)),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        initial_pan_orbit(camera),
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, camera.distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "Scene ready: {}x{} viewport, fov {} deg",
        viewport.width, viewport.height, camera.fov_degrees
    );
}

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: TITLE.to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Logging is up once DefaultPlugins are built.
    app.insert_resource(load_config());

    app.add_plugins(PanOrbitCameraPlugin);
    app.add_plugins(ViewportPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(SatellitePlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(MissionPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
}
