//! Axis-aligned overlap predicate gating NPC interaction.
use crate::world::components::Bounds;

/// Strict AABB overlap. Rectangles that merely touch along an edge do not
/// count as overlapping.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.x + b.width && a.x + a.width > b.x && a.y < b.y + b.height && a.y + a.height > b.y
}
