//! Interaction module gating interact presses on AABB overlap.
pub mod detector;
pub mod plugin;
pub mod systems;

pub use plugin::InteractionPlugin;
