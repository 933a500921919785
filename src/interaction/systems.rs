//! Resolves interact presses against the NPC roster.
use bevy::prelude::*;

use crate::{
    input::events::InteractCommand,
    interaction::detector::overlaps,
    npc::{
        components::{Npc, NpcRoster},
        events::NpcInteractedEvent,
    },
    player::components::Player,
    world::components::GridPosition,
};

/// On a tick with an interact press, walks the roster in order and notifies
/// every NPC whose rectangle overlaps the player's. Deliberately not
/// first-match: the full list is evaluated. Several presses in one tick
/// collapse into a single pass.
pub fn resolve_interactions(
    mut interacts: MessageReader<InteractCommand>,
    roster: Res<NpcRoster>,
    player_query: Query<&GridPosition, With<Player>>,
    npc_query: Query<(&GridPosition, &Npc)>,
    mut interactions: MessageWriter<NpcInteractedEvent>,
) {
    if interacts.is_empty() {
        return;
    }
    interacts.clear();

    let Ok(player_position) = player_query.single() else {
        return;
    };
    let player_bounds = player_position.bounds();

    for entity in roster.iter() {
        let Ok((npc_position, npc)) = npc_query.get(entity) else {
            continue;
        };
        if overlaps(&player_bounds, &npc_position.bounds()) {
            debug!("Player overlaps {}", npc.name);
            interactions.write(NpcInteractedEvent {
                name: npc.name.clone(),
            });
        }
    }
}
