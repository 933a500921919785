//! NPC module exposes identity data, the roster, and interaction output.
pub mod components;
pub mod events;
pub mod plugin;
pub mod systems;

pub use plugin::NpcPlugin;
