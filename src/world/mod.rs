//! World module housing spatial primitives, settings, and render syncing.
pub mod components;
pub mod plugin;
pub mod settings;
pub mod systems;

pub use plugin::WorldPlugin;
