//! Shared configuration, camera and viewport plumbing.

pub mod camera;
pub mod config;
pub mod viewport;

pub use camera::{MainCamera, initial_pan_orbit, perspective_projection};
pub use config::{ConstellationConfig, VizConfig, load_config};
pub use viewport::{ViewportPlugin, ViewportSize};
