//! Systems spawning and moving the player square.
use bevy::prelude::*;

use crate::{
    input::events::MovementCommand,
    player::components::Player,
    world::{
        components::{GridPosition, ENTITY_SIZE},
        settings::WorldSettings,
        systems::logical_to_world,
    },
};

/// Starting position of the player square.
const PLAYER_START: IVec2 = IVec2::new(100, 100);
/// Z layer for the player sprite. NPCs draw on a higher layer, preserving
/// the painter's order of the renderer (player first, then NPCs).
pub const PLAYER_LAYER: f32 = 1.0;

/// Spawns the red player square at its fixed starting position.
pub fn spawn_player(mut commands: Commands, settings: Res<WorldSettings>) {
    let position = GridPosition::new(PLAYER_START.x, PLAYER_START.y);

    commands.spawn((
        Sprite {
            color: Color::srgb_u8(255, 0, 0),
            custom_size: Some(Vec2::splat(ENTITY_SIZE as f32)),
            ..default()
        },
        Transform::from_translation(logical_to_world(&position, &settings, PLAYER_LAYER)),
        position,
        Player,
        Name::new("Player"),
    ));
}

/// Applies every movement command delivered this tick to the player
/// position. Deltas are summed as-is; two opposite keys cancel.
pub fn apply_movement(
    mut movements: MessageReader<MovementCommand>,
    mut query: Query<&mut GridPosition, With<Player>>,
) {
    if movements.is_empty() {
        return;
    }

    let Ok(mut position) = query.single_mut() else {
        movements.clear();
        return;
    };

    for command in movements.read() {
        position.translate(command.delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn movement_app() -> App {
        let mut app = App::new();
        app.add_message::<MovementCommand>();
        app.add_systems(Update, apply_movement);
        app
    }

    fn queue_movement(app: &mut App, delta: IVec2) {
        app.world_mut()
            .resource_mut::<Messages<MovementCommand>>()
            .write(MovementCommand { delta });
    }

    #[test]
    fn movement_sums_all_deltas_in_a_tick() {
        let mut app = movement_app();
        let player = app
            .world_mut()
            .spawn((GridPosition::new(100, 100), Player))
            .id();

        queue_movement(&mut app, IVec2::new(0, 5));
        queue_movement(&mut app, IVec2::new(0, 5));
        queue_movement(&mut app, IVec2::new(5, 0));
        app.update();

        let position = app.world().get::<GridPosition>(player).unwrap();
        assert_eq!(*position, GridPosition::new(105, 110));
    }

    #[test]
    fn opposite_commands_cancel_arithmetically() {
        let mut app = movement_app();
        let player = app
            .world_mut()
            .spawn((GridPosition::new(100, 100), Player))
            .id();

        queue_movement(&mut app, IVec2::new(-5, 0));
        queue_movement(&mut app, IVec2::new(5, 0));
        app.update();

        let position = app.world().get::<GridPosition>(player).unwrap();
        assert_eq!(*position, GridPosition::new(100, 100));
    }

    #[test]
    fn movement_accumulates_across_ticks() {
        let mut app = movement_app();
        let player = app
            .world_mut()
            .spawn((GridPosition::new(100, 100), Player))
            .id();

        queue_movement(&mut app, IVec2::new(0, 5));
        app.update();
        queue_movement(&mut app, IVec2::new(0, 5));
        app.update();

        let position = app.world().get::<GridPosition>(player).unwrap();
        assert_eq!(*position, GridPosition::new(100, 110));
    }

    #[test]
    fn no_boundary_clamping_is_applied() {
        let mut app = movement_app();
        let player = app
            .world_mut()
            .spawn((GridPosition::new(0, 0), Player))
            .id();

        queue_movement(&mut app, IVec2::new(-5, -5));
        app.update();

        let position = app.world().get::<GridPosition>(player).unwrap();
        assert_eq!(*position, GridPosition::new(-5, -5));
    }
}
