//! Shared spatial components for world entities.
use bevy::prelude::*;

/// Edge length of every entity rectangle, in screen units.
pub const ENTITY_SIZE: i32 = 50;

/// Integer screen-space position with a top-left origin and y growing
/// downward. This is the authoritative position for gameplay; sprite
/// transforms are derived from it each tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Axis-aligned bounding rectangle used for overlap tests.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.x,
            y: self.y,
            width: ENTITY_SIZE,
            height: ENTITY_SIZE,
        }
    }

    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Axis-aligned integer rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
