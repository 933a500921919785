//! WorldPlugin owns shared settings, the camera, and transform syncing.
use bevy::prelude::*;

use crate::{
    core::plugin::{FrameSet, GameState},
    world::{
        settings::WorldSettings,
        systems::{spawn_camera, sync_sprite_transforms},
    },
};

pub struct WorldPlugin {
    settings: WorldSettings,
}

impl WorldPlugin {
    /// Creates the plugin with settings loaded ahead of app construction, so
    /// the same values configure both the window and the world systems.
    pub fn new(settings: WorldSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        info!(
            "World configured: {}x{} window, movement step {}",
            self.settings.window_width, self.settings.window_height, self.settings.move_step
        );

        app.insert_resource(self.settings.clone())
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                sync_sprite_transforms
                    .in_set(FrameSet::Render)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
