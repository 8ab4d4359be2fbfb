//! # Shard World
//!
//! Terrain, static objects and movement resolution.
//!
//! ## Features
//! - Land and static tile descriptor tables
//! - `TerrainService` / `StaticsService` lookup traits
//! - In-memory terrain map and statics index
//! - Elevation resolver deciding where a step ends up, or why it can't
//!
//! ## Example
//!
//! ```rust
//! use shard_core::{Direction, Point3D};
//! use shard_world::*;
//! use std::sync::Arc;
//!
//! let mut tiles = TileData::new();
//! tiles.insert_land(0, LandTile::new("grass", 0));
//! tiles.insert_static(1, StaticTile::new("box", 0, 5));
//! let tiles = Arc::new(tiles);
//!
//! let map = TerrainMap::with_fill(32, 32, MapCell::new(0, 0), tiles.clone());
//! let mut statics = StaticsIndex::new(tiles);
//! statics.add(1, Point3D::new(11, 10, 0));
//!
//! let resolver = ElevationResolver::new(&map, &statics);
//! let resolution = resolver.resolve(Point3D::new(10, 10, 0), Direction::East).unwrap();
//! assert_eq!(resolution.destination(), Some(Point3D::new(11, 10, 5)));
//! ```

pub mod error;
pub mod tiles;
pub mod services;
pub mod map;
pub mod statics;
pub mod elevation;

pub use error::{WorldError, Result};
pub use tiles::{
    LandTile, StaticInstance, StaticTile, TerrainTile, TileData, FLAG_BACKGROUND,
    FLAG_IMPASSABLE, FLAG_STAIR, FLAG_SURFACE,
};
pub use services::{StaticsService, TerrainService};
pub use map::{MapCell, TerrainMap};
pub use statics::StaticsIndex;
pub use elevation::{
    BlockReason, ElevationResolver, MoveTrace, Resolution, TraceEvent, CHARACTER_HEIGHT,
    MAX_CLIMB,
};
