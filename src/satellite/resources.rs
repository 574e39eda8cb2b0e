//! Satellite resources for managing marker state

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::core::ConstellationConfig;
use crate::orbital::{OrbitalPlane, phase_offset};

/// Per-marker record, kept apart from the render entity it drives
#[derive(Clone, Debug)]
pub struct MarkerRecord {
    pub plane: u32,
    /// Radians, fixed at creation
    pub phase: f64,
    /// Current position in scene units
    pub position: DVec3,
    pub entity: Option<Entity>,
}

/// Resource holding every marker of the constellation, indexed by `MarkerIndex`
#[derive(Resource, Debug, Default)]
pub struct Constellation {
    pub markers: Vec<MarkerRecord>,
    pub planes: Vec<OrbitalPlane>,
    pub radius: f64,
}

impl Constellation {
    /// Lay out `planes * sats_per_plane` markers evenly spaced within each plane.
    pub fn new(config: &ConstellationConfig) -> Self {
        let planes: Vec<OrbitalPlane> = (0..config.planes)
            .map(|p| OrbitalPlane::new(p, config.planes))
            .collect();

        let mut markers = Vec::with_capacity(config.marker_count());
        for plane in &planes {
            for slot in 0..config.sats_per_plane {
                let phase = phase_offset(slot, config.sats_per_plane);
                markers.push(MarkerRecord {
                    plane: plane.index,
                    phase,
                    position: plane.position(0.0, phase, config.radius),
                    entity: None,
                });
            }
        }

        Self {
            markers,
            planes,
            radius: config.radius,
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[cfg(test)]
    pub fn plane(&self, index: u32) -> Option<&OrbitalPlane> {
        self.planes.get(index as usize)
    }

    /// Recompute every marker position for time `t`.
    pub fn update(&mut self, t: f64) {
        let radius = self.radius;
        for marker in &mut self.markers {
            if let Some(plane) = self.planes.get(marker.plane as usize) {
                marker.position = plane.position(t, marker.phase, radius);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let constellation = Constellation::new(&ConstellationConfig::default());
        assert_eq!(constellation.len(), 12);
        assert_eq!(constellation.planes.len(), 3);
        for p in 0..3 {
            let count = constellation
                .markers
                .iter()
                .filter(|m| m.plane == p)
                .count();
            assert_eq!(count, 4);
        }
        assert!(constellation.markers.iter().all(|m| m.entity.is_none()));
    }

    #[test]
    fn test_zero_planes_or_slots_is_empty() {
        let no_planes = ConstellationConfig {
            planes: 0,
            ..default()
        };
        assert!(Constellation::new(&no_planes).is_empty());

        let no_slots = ConstellationConfig {
            sats_per_plane: 0,
            ..default()
        };
        let constellation = Constellation::new(&no_slots);
        assert!(constellation.is_empty());
        assert_eq!(constellation.planes.len(), 3);
    }

    #[test]
    fn test_update_keeps_markers_on_sphere() {
        let mut constellation = Constellation::new(&ConstellationConfig::default());
        for frame in 0..500 {
            constellation.update(frame as f64 * 0.003);
        }
        for marker in &constellation.markers {
            assert!((marker.position.length() - 5.5).abs() < 1e-9);
        }
    }

    #[test]
    fn test_first_marker_starts_on_x_axis() {
        let constellation = Constellation::new(&ConstellationConfig::default());
        let first = &constellation.markers[0];
        assert_eq!(first.plane, 0);
        assert_eq!(first.phase, 0.0);
        assert!((first.position - DVec3::new(5.5, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_update_is_deterministic() {
        let mut a = Constellation::new(&ConstellationConfig::default());
        let mut b = Constellation::new(&ConstellationConfig::default());
        a.update(0.003);
        a.update(7.5);
        b.update(7.5);
        for (ma, mb) in a.markers.iter().zip(&b.markers) {
            assert_eq!(ma.position, mb.position);
        }
    }
}
