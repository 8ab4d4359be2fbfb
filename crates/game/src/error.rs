//! Error types for the game layer

use shard_core::{Serial, ShardError};
use shard_world::WorldError;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Unknown object {0}")]
    UnknownObject(Serial),

    #[error("Object {0} is not a container")]
    NotAContainer(Serial),

    #[error("Container {0} is full")]
    ContainerFull(Serial),

    /// Putting a container inside itself or one of its own contents
    #[error("Cannot put {item} inside {container}")]
    ContainerCycle { item: Serial, container: Serial },

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Shard(#[from] ShardError),
}

impl From<GameError> for ShardError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::Shard(inner) => inner,
            GameError::World(inner) => inner.into(),
            GameError::UnknownObject(serial) => ShardError::NotFound(format!("object {}", serial)),
            other => ShardError::InvalidData(other.to_string()),
        }
    }
}

/// Result type for game operations
pub type Result<T> = std::result::Result<T, GameError>;
