//! Interaction plugin wiring the detector into the update phase.
use bevy::prelude::*;

use crate::{
    core::plugin::{FrameSet, GameState},
    interaction::systems::resolve_interactions,
    player::systems::apply_movement,
};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            resolve_interactions
                .in_set(FrameSet::Update)
                .after(apply_movement)
                .run_if(in_state(GameState::Running)),
        );
    }
}
