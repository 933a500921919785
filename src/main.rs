use bevy::prelude::*;
use bevy::window::WindowResolution;

mod core;
mod input;
mod interaction;
mod npc;
mod player;
mod world;

use crate::{
    core::CorePlugin, input::InputPlugin, interaction::InteractionPlugin, npc::NpcPlugin,
    player::PlayerPlugin, world::settings::WorldSettings, world::WorldPlugin,
};

fn main() -> AppExit {
    let settings = WorldSettings::load_or_default();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: settings.window_title.clone(),
                    resolution: WindowResolution::new(
                        settings.window_width,
                        settings.window_height,
                    ),
                    resizable: false,
                    ..default()
                }),
                // Close requests go through the core quit watcher so the run
                // state transitions before the app exits.
                close_when_requested: false,
                ..default()
            }),
            CorePlugin,
            WorldPlugin::new(settings),
            PlayerPlugin,
            NpcPlugin,
            InputPlugin,
            InteractionPlugin,
        ))
        .run()
}
