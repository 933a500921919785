//! Player module - spawns the player square and applies movement.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
