//! delve-core: Core game logic for the delve dungeon crawl
//!
//! This crate contains all game logic with no terminal dependencies.
//! It is designed to be pure and testable: randomness is injected through
//! the [`Dice`] trait, and the presentation layer only ever sees rendered
//! snapshot lines plus buffered messages.

pub mod engine;
pub mod entity;
pub mod error;
pub mod level;
pub mod map;
pub mod rng;
pub mod vector;

pub use engine::{Command, Direction, Engine, EngineStatus, Rules, TurnResult};
pub use entity::{AttackOutcome, Entity, EntityKind};
pub use error::{AttackError, LoadError};
pub use level::{EntityRecord, LevelConfig};
pub use map::GameMap;
pub use rng::{Dice, GameRng, ScriptedDice};
pub use vector::Vec2;
