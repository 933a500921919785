//! NPC plugin wiring the roster spawn and interaction announcements.
use bevy::prelude::*;

use crate::{
    core::plugin::{FrameSet, GameState},
    interaction::systems::resolve_interactions,
    npc::{
        components::NpcRoster,
        events::NpcInteractedEvent,
        systems::{announce_interactions, spawn_npcs},
    },
};

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NpcRoster>()
            .add_message::<NpcInteractedEvent>()
            .add_systems(Startup, spawn_npcs)
            .add_systems(
                Update,
                announce_interactions
                    .in_set(FrameSet::Update)
                    .after(resolve_interactions)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
