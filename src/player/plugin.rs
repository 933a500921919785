//! Player plugin wiring spawn and movement systems.
use bevy::prelude::*;

use crate::{
    core::plugin::{FrameSet, GameState},
    player::systems::{apply_movement, spawn_player},
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player).add_systems(
            Update,
            apply_movement
                .in_set(FrameSet::Update)
                .run_if(in_state(GameState::Running)),
        );
    }
}
