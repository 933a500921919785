//! Input module translating raw key-down events into game commands.
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::InputPlugin;
