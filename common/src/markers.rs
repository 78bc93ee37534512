use bevy_ecs::prelude::*;

// Marker components to disambiguate entity archetypes across the arena.
#[derive(Component, Debug, Default)]
pub struct PlayerMarker;

#[derive(Component, Debug, Default)]
pub struct CopMarker;

#[derive(Component, Debug, Default)]
pub struct PickupMarker;

#[derive(Component, Debug, Default)]
pub struct BombMarker;
