//! NPC-facing messages broadcast between systems.
use bevy::prelude::{Event, Message};

/// Fired for each NPC whose rectangle overlapped the player on an interact
/// tick, in roster order.
#[derive(Event, Message, Debug, Clone)]
pub struct NpcInteractedEvent {
    pub name: String,
}
