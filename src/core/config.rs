//! Runtime configuration
//!
//! Every visualization constant lives in [`VizConfig`]. The defaults reproduce the
//! stock constellation; a JSON file in the platform config directory can override
//! any subset of fields.

use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::mission::Mission;

pub const DEFAULT_HEALTH_URL: &str = "http://localhost:8000/health";
pub const MAX_PLANES: u32 = 64;
pub const MAX_SATS_PER_PLANE: u32 = 256;

const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level configuration resource
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub constellation: ConstellationConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
    /// Target of the "Backend Health" link
    pub health_url: String,
    /// Mission profile shown in the recommendations panel
    pub mission: Mission,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            constellation: ConstellationConfig::default(),
            camera: CameraConfig::default(),
            scene: SceneConfig::default(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
            mission: Mission::default(),
        }
    }
}

/// Shape of the marker constellation and its animation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    pub planes: u32,
    pub sats_per_plane: u32,
    /// Orbital radius in scene units
    pub radius: f64,
    /// Time units added per frame
    pub time_step: f64,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            planes: 3,
            sats_per_plane: 4,
            radius: 5.5,
            time_step: 0.003,
        }
    }
}

impl ConstellationConfig {
    pub fn marker_count(&self) -> usize {
        self.planes as usize * self.sats_per_plane as usize
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial distance from the origin along +Z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            distance: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub planet_radius: f32,
    pub planet_segments: u32,
    pub ring_half_width: f32,
    pub ring_segments: u32,
    pub marker_radius: f32,
    pub light_position: [f32; 3],
    pub light_illuminance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            planet_radius: 2.0,
            planet_segments: 64,
            ring_half_width: 0.005,
            ring_segments: 256,
            marker_radius: 0.05,
            light_position: [5.0, 5.0, 10.0],
            light_illuminance: 8_000.0,
        }
    }
}

impl VizConfig {
    /// Replace values that would break the animation with their defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = ConstellationConfig::default();
        let c = &mut self.constellation;
        if !c.radius.is_finite() || c.radius <= 0.0 {
            warn!("Invalid orbit radius {}, using {}", c.radius, defaults.radius);
            c.radius = defaults.radius;
        }
        if !c.time_step.is_finite() || c.time_step < 0.0 {
            warn!(
                "Invalid time step {}, using {}",
                c.time_step, defaults.time_step
            );
            c.time_step = defaults.time_step;
        }
        if c.planes > MAX_PLANES {
            warn!("{} planes requested, capping at {}", c.planes, MAX_PLANES);
            c.planes = MAX_PLANES;
        }
        if c.sats_per_plane > MAX_SATS_PER_PLANE {
            warn!(
                "{} markers per plane requested, capping at {}",
                c.sats_per_plane, MAX_SATS_PER_PLANE
            );
            c.sats_per_plane = MAX_SATS_PER_PLANE;
        }

        let cam_defaults = CameraConfig::default();
        let cam = &mut self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            warn!(
                "Invalid field of view {}, using {}",
                cam.fov_degrees, cam_defaults.fov_degrees
            );
            cam.fov_degrees = cam_defaults.fov_degrees;
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            warn!(
                "Invalid clip planes near {} far {}, using {} / {}",
                cam.near, cam.far, cam_defaults.near, cam_defaults.far
            );
            cam.near = cam_defaults.near;
            cam.far = cam_defaults.far;
        }
        self
    }
}

/// JSON-backed store for [`VizConfig`]
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl ConfigStore {
    /// Resolve the platform config directory:
    /// - Linux: ~/.config/gnssviz/
    /// - macOS: ~/Library/Application Support/gnssviz/
    /// - Windows: %APPDATA%\gnssviz\config\
    pub fn new() -> Result<Self, anyhow::Error> {
        let proj_dirs = ProjectDirs::from("", "", "gnssviz")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(Self::new_in_dir(proj_dirs.config_dir().to_path_buf()))
    }

    pub fn new_in_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Returns Ok(None) when no config file exists.
    pub fn read(&self) -> Result<Option<VizConfig>, anyhow::Error> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let config: VizConfig = serde_json::from_str(&contents)?;
        Ok(Some(config))
    }

    pub fn write(&self, config: &VizConfig) -> Result<(), anyhow::Error> {
        fs::create_dir_all(&self.config_dir)?;
        let contents = serde_json::to_string_pretty(config)?;
        fs::write(self.path(), contents)?;
        Ok(())
    }
}

/// Load the user config, falling back to defaults on any failure.
///
/// Call after `DefaultPlugins` so the log subscriber is installed.
pub fn load_config() -> VizConfig {
    match ConfigStore::new() {
        Ok(store) => load_config_from(&store),
        Err(e) => {
            warn!("{e}; using default configuration");
            VizConfig::default()
        }
    }
}

/// Load from `store`; a missing file is replaced by a default template.
pub fn load_config_from(store: &ConfigStore) -> VizConfig {
    match store.read() {
        Ok(Some(config)) => {
            info!("Loaded configuration from {}", store.path().display());
            config.sanitized()
        }
        Ok(None) => {
            let config = VizConfig::default();
            // Leave a template behind for the user to edit.
            match store.write(&config) {
                Ok(()) => info!("Wrote default configuration to {}", store.path().display()),
                Err(e) => debug!("Could not write {}: {e}", store.path().display()),
            }
            config
        }
        Err(e) => {
            warn!(
                "Failed to read {}: {e}; using default configuration",
                store.path().display()
            );
            VizConfig::default()
        }
    }
}
