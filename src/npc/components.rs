//! NPC identity component and the spawn-ordered roster.
use bevy::prelude::*;

/// Identity of a non-player character.
#[derive(Component, Debug, Clone)]
pub struct Npc {
    pub name: String,
}

impl Npc {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// NPC entities in spawn order. Interaction checks walk this list so
/// notifications always arrive in roster order. The list is fixed after
/// startup.
#[derive(Resource, Default, Debug)]
pub struct NpcRoster {
    entries: Vec<Entity>,
}

impl NpcRoster {
    pub fn push(&mut self, entity: Entity) {
        self.entries.push(entity);
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
