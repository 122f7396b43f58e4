//! Error taxonomy.
//!
//! Load errors are fatal at startup only. Attack errors are expected,
//! recoverable, and converted to user-facing messages at the engine
//! boundary; they never cross a turn boundary.

use thiserror::Error;

/// Errors raised while loading the terrain and level configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("terrain contains no cells")]
    EmptyTerrain,

    #[error("level configuration is malformed: {0}")]
    MalformedLevel(#[from] serde_json::Error),

    #[error("no playable character in level configuration")]
    NoPlayableCharacter,

    #[error("enemy record `{name}` is invalid")]
    InvalidEnemy { name: String },
}

/// Expected, turn-local failures of an attack attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("the attacker is dead")]
    DeadAttacker,

    #[error("the target is out of reach")]
    OutOfRange,
}
