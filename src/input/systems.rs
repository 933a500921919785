//! Translates raw keyboard events into movement and interact commands.
use bevy::{input::keyboard::KeyboardInput, prelude::*};

use crate::{
    input::events::{InteractCommand, MovementCommand},
    world::settings::WorldSettings,
};

/// Discrete action a single key-down event maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Move(IVec2),
    Interact,
}

/// Maps one key-down event to its action, if the key is bound. Arrow keys
/// alias WASD.
pub fn action_for_key(key: KeyCode, step: i32) -> Option<InputAction> {
    match key {
        KeyCode::KeyW | KeyCode::ArrowUp => Some(InputAction::Move(IVec2::new(0, -step))),
        KeyCode::KeyS | KeyCode::ArrowDown => Some(InputAction::Move(IVec2::new(0, step))),
        KeyCode::KeyA | KeyCode::ArrowLeft => Some(InputAction::Move(IVec2::new(-step, 0))),
        KeyCode::KeyD | KeyCode::ArrowRight => Some(InputAction::Move(IVec2::new(step, 0))),
        KeyCode::KeyE => Some(InputAction::Interact),
        _ => None,
    }
}

/// Drains the tick's key-down events and emits one command per event.
/// Repeats are not suppressed and opposite directions are not merged;
/// movement stays purely additive.
pub fn map_keyboard_input(
    mut keys: MessageReader<KeyboardInput>,
    settings: Res<WorldSettings>,
    mut movements: MessageWriter<MovementCommand>,
    mut interacts: MessageWriter<InteractCommand>,
) {
    for event in keys.read() {
        if !event.state.is_pressed() {
            continue;
        }

        match action_for_key(event.key_code, settings.move_step) {
            Some(InputAction::Move(delta)) => {
                movements.write(MovementCommand { delta });
            }
            Some(InputAction::Interact) => {
                interacts.write(InteractCommand);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_keys_map_to_fixed_steps() {
        assert_eq!(
            action_for_key(KeyCode::KeyW, 5),
            Some(InputAction::Move(IVec2::new(0, -5)))
        );
        assert_eq!(
            action_for_key(KeyCode::KeyS, 5),
            Some(InputAction::Move(IVec2::new(0, 5)))
        );
        assert_eq!(
            action_for_key(KeyCode::KeyA, 5),
            Some(InputAction::Move(IVec2::new(-5, 0)))
        );
        assert_eq!(
            action_for_key(KeyCode::KeyD, 5),
            Some(InputAction::Move(IVec2::new(5, 0)))
        );
    }

    #[test]
    fn arrow_keys_alias_wasd() {
        assert_eq!(
            action_for_key(KeyCode::ArrowUp, 5),
            action_for_key(KeyCode::KeyW, 5)
        );
        assert_eq!(
            action_for_key(KeyCode::ArrowDown, 5),
            action_for_key(KeyCode::KeyS, 5)
        );
        assert_eq!(
            action_for_key(KeyCode::ArrowLeft, 5),
            action_for_key(KeyCode::KeyA, 5)
        );
        assert_eq!(
            action_for_key(KeyCode::ArrowRight, 5),
            action_for_key(KeyCode::KeyD, 5)
        );
    }

    #[test]
    fn interact_key_maps_to_interact() {
        assert_eq!(action_for_key(KeyCode::KeyE, 5), Some(InputAction::Interact));
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(action_for_key(KeyCode::KeyQ, 5), None);
        assert_eq!(action_for_key(KeyCode::Space, 5), None);
    }

    #[test]
    fn step_comes_from_settings() {
        assert_eq!(
            action_for_key(KeyCode::KeyD, 12),
            Some(InputAction::Move(IVec2::new(12, 0)))
        );
    }
}
