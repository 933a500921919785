//! Systems spawning the NPC roster and voicing interactions.
use bevy::prelude::*;

use crate::{
    npc::{
        components::{Npc, NpcRoster},
        events::NpcInteractedEvent,
    },
    world::{
        components::{GridPosition, ENTITY_SIZE},
        settings::WorldSettings,
        systems::logical_to_world,
    },
};

/// Z layer for NPC sprites, above the player layer.
pub const NPC_LAYER: f32 = 2.0;

/// Spawns the fixed NPC roster in list order.
pub fn spawn_npcs(
    mut commands: Commands,
    settings: Res<WorldSettings>,
    mut roster: ResMut<NpcRoster>,
) {
    let prototypes = [
        ("Merchant", IVec2::new(400, 300)),
        ("Warrior", IVec2::new(600, 400)),
    ];

    for (name, spot) in prototypes {
        let position = GridPosition::new(spot.x, spot.y);
        let entity = commands
            .spawn((
                Sprite {
                    color: Color::srgb_u8(0, 255, 0),
                    custom_size: Some(Vec2::splat(ENTITY_SIZE as f32)),
                    ..default()
                },
                Transform::from_translation(logical_to_world(&position, &settings, NPC_LAYER)),
                position,
                Npc::new(name),
                Name::new(name),
            ))
            .id();
        roster.push(entity);
    }

    info!("Spawned {} NPCs", roster.len());
}

/// The interact side effect: one notification line per addressed NPC.
pub fn announce_interactions(mut interactions: MessageReader<NpcInteractedEvent>) {
    for interaction in interactions.read() {
        info!("Interacting with {}", interaction.name);
    }
}
