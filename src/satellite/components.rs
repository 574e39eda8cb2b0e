//! Satellite components for the Bevy ECS system

use bevy::prelude::*;

/// Component marker for satellite marker entities
#[derive(Component)]
pub struct Satellite;

/// Index of the entity's record in the `Constellation`
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct MarkerIndex(pub usize);

