//! Command messages emitted by the key mapper.
use bevy::prelude::{Event, IVec2, Message};

/// One discrete movement step derived from a single key-down event.
#[derive(Event, Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementCommand {
    pub delta: IVec2,
}

/// Raised when the interact key is pressed; consumed as a per-tick flag.
#[derive(Event, Message, Debug, Clone, Copy)]
pub struct InteractCommand;
