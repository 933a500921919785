//! Components for the player entity.
use bevy::prelude::*;

/// Marker component identifying the player-controlled square.
#[derive(Component, Debug)]
pub struct Player;
