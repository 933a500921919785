//! Camera setup and the sprite-transform side of rendering.
use bevy::prelude::*;

use crate::world::{
    components::{GridPosition, ENTITY_SIZE},
    settings::WorldSettings,
};

/// Spawns the 2D camera that presents the scene.
pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("MainCamera")));
}

/// Maps an integer screen-space position (top-left origin, y down) to Bevy
/// world coordinates (centered origin, y up), keeping the given z layer.
pub fn logical_to_world(position: &GridPosition, settings: &WorldSettings, z: f32) -> Vec3 {
    let half_width = settings.window_width as f32 / 2.0;
    let half_height = settings.window_height as f32 / 2.0;
    let half_size = ENTITY_SIZE as f32 / 2.0;

    Vec3::new(
        position.x as f32 + half_size - half_width,
        half_height - position.y as f32 - half_size,
        z,
    )
}

/// Mirrors authoritative grid positions into sprite transforms.
pub fn sync_sprite_transforms(
    settings: Res<WorldSettings>,
    mut query: Query<(&GridPosition, &mut Transform), Changed<GridPosition>>,
) {
    for (position, mut transform) in query.iter_mut() {
        let z = transform.translation.z;
        transform.translation = logical_to_world(position, &settings, z);
    }
}
