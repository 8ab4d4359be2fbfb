//! Error types for the world crate

use shard_core::{Point2D, ShardError};

/// World data error types
///
/// All of these are data-integrity faults: the tile tables or the map do
/// not describe something the world refers to.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A static instance refers to a type id missing from the tile table
    #[error("Unknown static tile: 0x{0:04X}")]
    UnknownStaticTile(u16),

    /// A map cell refers to a land id missing from the tile table
    #[error("Unknown land tile: 0x{0:04X}")]
    UnknownLandTile(u16),

    /// Terrain lookup outside the map
    #[error("Position {0} is outside the map")]
    OutOfBounds(Point2D),

    /// Map construction with inconsistent data
    #[error("Invalid map: {0}")]
    InvalidMap(String),
}

impl From<WorldError> for ShardError {
    fn from(err: WorldError) -> Self {
        ShardError::InvalidData(err.to_string())
    }
}

/// Result type for world operations
pub type Result<T> = std::result::Result<T, WorldError>;
