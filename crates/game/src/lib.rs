//! # Shard Game Logic Layer
//!
//! Live items and mobiles and the world they share.
//!
//! ## Modules
//!
//! - `entity` - Item and mobile state
//! - `world` - World state and the statics view movement resolves against
//! - `movement` - Walk requests with per-mobile write-back
//! - `containers` - Ground and container placement with their packets
//! - `error` - Game error type

pub mod entity;
pub mod error;
pub mod world;
pub mod movement;
pub mod containers;

// Re-export commonly used types
pub use entity::{Item, ItemKind, Mobile, Placement};
pub use error::{GameError, Result};
pub use world::{World, WorldView};
pub use movement::MoveOutcome;
