//! Core module owning the frame-loop state machine and phase ordering.
pub mod plugin;

pub use plugin::CorePlugin;
