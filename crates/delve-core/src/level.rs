//! Level configuration document.
//!
//! A JSON document describing one character record and zero-or-more enemy
//! records. Missing or malformed required fields surface as a load error,
//! never as a crash in gameplay logic.

use serde::Deserialize;

use crate::entity::{Entity, EntityKind};
use crate::error::LoadError;
use crate::vector::Vec2;

/// One entity record in the level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub level: u32,
    pub health: i32,
    /// Starting position as `[row, col]`.
    pub position: [i32; 2],
    pub favorite_place: String,
    #[serde(default)]
    pub spellcaster: bool,
}

impl EntityRecord {
    /// A record is playable when it has a display name and a positive level.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.level >= 1
    }

    pub(crate) fn into_entity(self, kind: EntityKind) -> Entity {
        let mut entity = Entity::new(
            kind,
            self.name,
            self.level,
            self.health,
            Vec2::from(self.position),
            self.favorite_place,
        );
        entity.spellcaster = self.spellcaster;
        entity
    }
}

/// The full level configuration: the playable character plus the enemies.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelConfig {
    pub character: EntityRecord,
    #[serde(default)]
    pub enemies: Vec<EntityRecord>,
}

impl LevelConfig {
    /// Parse a level configuration from its JSON source.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }
}
