//! Input plugin wiring the key mapper into the frame's input phase.
use bevy::prelude::*;

use crate::{
    core::plugin::{FrameSet, GameState},
    input::{
        events::{InteractCommand, MovementCommand},
        systems::map_keyboard_input,
    },
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MovementCommand>()
            .add_message::<InteractCommand>()
            .add_systems(
                Update,
                map_keyboard_input
                    .in_set(FrameSet::Input)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
