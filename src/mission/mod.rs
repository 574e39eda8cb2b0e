//! Mission planning module
//!
//! This module holds the active mission profile and the architecture
//! recommendations derived from it. M cycles the mission type.

use bevy::prelude::*;

pub mod rules;
pub mod types;

pub use rules::{recommend, report};
pub use types::{Mission, MissionReport, MissionType};

use crate::core::VizConfig;

/// The mission currently shown, with its recommendations
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ActiveMission {
    report: MissionReport,
}

impl ActiveMission {
    pub fn new(mission: Mission) -> Self {
        Self {
            report: report(&mission),
        }
    }

    pub fn mission(&self) -> &Mission {
        &self.report.mission
    }

    pub fn recommendations(&self) -> &[&'static str] {
        &self.report.recommendations
    }

    pub fn note(&self) -> &'static str {
        self.report.note
    }

    /// Switch to the next mission type, keeping the other requirements.
    pub fn cycle_type(&mut self) {
        let mut mission = self.report.mission.clone();
        mission.mission_type = mission.mission_type.next();
        self.report = report(&mission);
    }
}

/// System to cycle the mission type with the M key
pub fn cycle_mission_type(input: Res<ButtonInput<KeyCode>>, mut active: ResMut<ActiveMission>) {
    if input.just_pressed(KeyCode::KeyM) {
        active.cycle_type();
        info!(
            "Mission type {}: {} recommendations",
            active.mission().mission_type,
            active.recommendations().len()
        );
    }
}

/// Plugin for the mission recommendations
pub struct MissionPlugin;

impl Plugin for MissionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VizConfig>();
        let mission = app.world().resource::<VizConfig>().mission.clone();

        app.insert_resource(ActiveMission::new(mission))
            .add_systems(Update, cycle_mission_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_active_mission_tracks_rules() {
        let active = ActiveMission::new(Mission::default());
        assert_eq!(active.mission().mission_type, MissionType::Eo);
        assert_eq!(active.recommendations(), recommend(&Mission::default()).as_slice());
        assert_eq!(active.note(), types::REPORT_NOTE);
    }

    #[test]
    fn test_m_key_cycles_and_recomputes() {
        let mut world = World::new();
        world.insert_resource(ActiveMission::new(Mission {
            mission_type: MissionType::Comm,
            ground_stations: Some(4),
            ..Default::default()
        }));
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::KeyM);
        world.insert_resource(input);

        world.run_system_once(cycle_mission_type).unwrap();

        let active = world.resource::<ActiveMission>();
        assert_eq!(active.mission().mission_type, MissionType::Iot);
        assert_eq!(active.mission().ground_stations, Some(4));
        assert_eq!(active.recommendations()[0], "Store-and-forward payload");
    }

    #[test]
    fn test_no_key_leaves_mission_unchanged() {
        let mut world = World::new();
        world.insert_resource(ActiveMission::new(Mission::default()));
        world.insert_resource(ButtonInput::<KeyCode>::default());

        world.run_system_once(cycle_mission_type).unwrap();

        assert_eq!(
            world.resource::<ActiveMission>().mission().mission_type,
            MissionType::Eo
        );
    }
}
