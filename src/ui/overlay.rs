//! Text overlay: title, health link, mission recommendations and animation status

use bevy::prelude::*;
use bevy_feathers::controls::{ButtonProps, button};
use bevy_feathers::theme::ThemedText;
use bevy_ui_widgets::Activate;

use crate::core::VizConfig;
use crate::mission::ActiveMission;
use crate::orbital::OrbitClock;
use crate::ui::link::open_url;

pub const TITLE: &str = "GNSS Visualization (Prototype)";
pub const SUBTITLE: &str = "Bevy • wgpu • Rust";
pub const HEALTH_LINK_LABEL: &str = "Backend Health";
const HINT: &str = "Drag to orbit, scroll to zoom, Space to pause, M to change mission";

/// Text node showing the animation clock
#[derive(Component)]
pub struct ClockLabel;

/// Button that opens the backend health page
#[derive(Component)]
pub struct HealthLink;

/// Text node listing the active mission's recommendations
#[derive(Component)]
pub struct MissionLabel;

pub fn clock_label_text(clock: &OrbitClock) -> String {
    let state = if clock.is_running() { "" } else { " (paused)" };
    format!("t = {:.3}{state}", clock.elapsed())
}

pub fn mission_panel_text(active: &ActiveMission) -> String {
    let mut text = format!("Mission: {}", active.mission().mission_type);
    for rec in active.recommendations() {
        text.push_str("\n- ");
        text.push_str(rec);
    }
    text.push('\n');
    text.push_str(active.note());
    text
}

/// Spawn the overlay nodes
pub fn setup_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(2.0),
                ..default()
            },
            Pickable::IGNORE,
            Name::new("Title overlay"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(TITLE),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(SUBTITLE),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(HINT),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            right: Val::Px(12.0),
            max_width: Val::Px(320.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::WHITE),
        MissionLabel,
        Pickable::IGNORE,
        Name::new("Mission overlay"),
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(10.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
            Name::new("Footer overlay"),
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    button(
                        ButtonProps::default(),
                        HealthLink,
                        Spawn((Text::new(HEALTH_LINK_LABEL), ThemedText)),
                    ),
                    Name::new("Health link"),
                ))
                .observe(on_health_link_activate);
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ClockLabel,
            ));
        });
}

fn on_health_link_activate(_activate: On<Activate>, config: Res<VizConfig>) {
    match open_url(&config.health_url) {
        Ok(()) => info!("Opened {}", config.health_url),
        Err(e) => warn!("Could not open health link: {e:#}"),
    }
}

/// System to refresh the clock readout
pub fn update_clock_label(
    clock: Res<OrbitClock>,
    mut labels: Query<&mut Text, With<ClockLabel>>,
) {
    for mut text in labels.iter_mut() {
        let value = clock_label_text(&clock);
        if text.0 != value {
            text.0 = value;
        }
    }
}

/// System to refresh the recommendations panel when the mission changes
pub fn update_mission_label(
    active: Res<ActiveMission>,
    mut labels: Query<&mut Text, With<MissionLabel>>,
) {
    for mut text in labels.iter_mut() {
        if active.is_changed() || text.0.is_empty() {
            text.0 = mission_panel_text(&active);
        }
    }
}
