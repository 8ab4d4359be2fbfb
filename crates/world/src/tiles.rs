//! Tile descriptors
//!
//! Land tiles describe the ground of a map cell, static tiles describe every
//! placed object of a given type. Both are loaded once and shared by all
//! cells and instances referring to them.

use crate::error::{Result, WorldError};
use serde::{Deserialize, Serialize};
use shard_core::Point3D;
use std::collections::HashMap;

/// Cannot be walked through
pub const FLAG_IMPASSABLE: u32 = 0x0000_0001;

/// Can be stood upon even if impassable
pub const FLAG_SURFACE: u32 = 0x0000_0002;

/// Stairs: blocks when its top reaches the actor's head
pub const FLAG_STAIR: u32 = 0x0000_0004;

/// Drawn behind other objects on the same cell
pub const FLAG_BACKGROUND: u32 = 0x0000_0008;

/// Ground tile descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandTile {
    pub name: String,
    pub flags: u32,
}

impl LandTile {
    pub fn new(name: impl Into<String>, flags: u32) -> Self {
        Self {
            name: name.into(),
            flags,
        }
    }

    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.flags & FLAG_IMPASSABLE != 0
    }
}

/// Static object descriptor, keyed by type id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTile {
    pub name: String,
    pub flags: u32,

    /// Height above the instance's own z
    pub height: u8,
}

impl StaticTile {
    pub fn new(name: impl Into<String>, flags: u32, height: u8) -> Self {
        Self {
            name: name.into(),
            flags,
            height,
        }
    }

    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.flags & FLAG_IMPASSABLE != 0
    }

    #[inline]
    pub fn is_surface(&self) -> bool {
        self.flags & FLAG_SURFACE != 0
    }

    #[inline]
    pub fn is_stair(&self) -> bool {
        self.flags & FLAG_STAIR != 0
    }

    #[inline]
    pub fn is_background(&self) -> bool {
        self.flags & FLAG_BACKGROUND != 0
    }
}

/// Ground of one map cell as seen by movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainTile {
    pub elevation: i32,
    pub impassable: bool,
    pub material_id: u16,
}

/// One placed object in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticInstance {
    pub type_id: u16,
    pub location: Point3D,
}

impl StaticInstance {
    pub const fn new(type_id: u16, location: Point3D) -> Self {
        Self { type_id, location }
    }
}

/// Land and static descriptor tables
#[derive(Debug, Clone, Default)]
pub struct TileData {
    land: HashMap<u16, LandTile>,
    statics: HashMap<u16, StaticTile>,
}

impl TileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a land tile descriptor
    pub fn insert_land(&mut self, id: u16, tile: LandTile) {
        self.land.insert(id, tile);
    }

    /// Add or replace a static tile descriptor
    pub fn insert_static(&mut self, id: u16, tile: StaticTile) {
        self.statics.insert(id, tile);
    }

    pub fn land_tile(&self, id: u16) -> Result<&LandTile> {
        self.land.get(&id).ok_or(WorldError::UnknownLandTile(id))
    }

    pub fn static_tile(&self, id: u16) -> Result<&StaticTile> {
        self.statics.get(&id).ok_or(WorldError::UnknownStaticTile(id))
    }

    pub fn land_count(&self) -> usize {
        self.land.len()
    }

    pub fn static_count(&self) -> usize {
        self.statics.len()
    }
}
