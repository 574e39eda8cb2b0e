//! Window resize handling
//!
//! Bevy resizes the render surface itself; this keeps the camera aspect ratio
//! and the tracked viewport size in step with the window.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::core::camera::MainCamera;

/// Current logical size of the primary window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// `width / height`, or 1.0 for a degenerate viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_drawable() {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Set the projection's aspect ratio to match `viewport`.
pub fn fit_projection(projection: &mut Projection, viewport: ViewportSize) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = viewport.aspect_ratio();
    }
}

/// System to track primary window resizes and refit the main camera
pub fn handle_window_resized(
    mut resized: MessageReader<WindowResized>,
    primary: Query<Entity, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportSize>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
) {
    let primary = primary.single().ok();
    for event in resized.read() {
        if primary.is_some_and(|window| window != event.window) {
            continue;
        }
        let size = ViewportSize::new(event.width, event.height);
        if !size.is_drawable() {
            debug!("Ignoring resize to {}x{}", event.width, event.height);
            continue;
        }
        if viewport.set_if_neq(size) {
            debug!("Viewport resized to {}x{}", size.width, size.height);
        }
        for mut projection in cameras.iter_mut() {
            fit_projection(&mut projection, size);
        }
    }
}

/// Plugin for viewport tracking
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(PreUpdate, handle_window_resized);
    }
}
