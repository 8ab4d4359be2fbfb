//! Lookup services movement resolution reads from
//!
//! Both traits describe read-only snapshots. Implementations must be safe
//! for concurrent reads so that moves of different actors can be resolved
//! in parallel.

use crate::error::Result;
use crate::tiles::{StaticInstance, StaticTile, TerrainTile};
use shard_core::Point2D;
use std::sync::Arc;

/// Ground elevation and land tiles per map cell
pub trait TerrainService: Send + Sync {
    /// Whether `at` lies on the map
    fn contains(&self, at: Point2D) -> bool;

    /// Ground elevation at `at`
    fn elevation(&self, at: Point2D) -> Result<i32>;

    /// Ground descriptor at `at`
    fn tile_at(&self, at: Point2D) -> Result<TerrainTile>;
}

/// Placed objects per map cell and their descriptors
pub trait StaticsService: Send + Sync {
    /// Every object on the cell, in a stable order
    fn instances_at(&self, at: Point2D) -> Vec<StaticInstance>;

    /// Descriptor for a type id
    ///
    /// A miss is a data-integrity fault and must be reported, not guessed.
    fn descriptor_of(&self, type_id: u16) -> Result<&StaticTile>;
}

impl<T: TerrainService + ?Sized> TerrainService for Arc<T> {
    fn contains(&self, at: Point2D) -> bool {
        (**self).contains(at)
    }

    fn elevation(&self, at: Point2D) -> Result<i32> {
        (**self).elevation(at)
    }

    fn tile_at(&self, at: Point2D) -> Result<TerrainTile> {
        (**self).tile_at(at)
    }
}

impl<S: StaticsService + ?Sized> StaticsService for Arc<S> {
    fn instances_at(&self, at: Point2D) -> Vec<StaticInstance> {
        (**self).instances_at(at)
    }

    fn descriptor_of(&self, type_id: u16) -> Result<&StaticTile> {
        (**self).descriptor_of(type_id)
    }
}
