//! In-memory statics index
//!
//! Keeps the placed objects of every cell in insertion order. Movement
//! resolution depends on that order when several objects qualify as a
//! perch at the same height.

use crate::error::Result;
use crate::services::StaticsService;
use crate::tiles::{StaticInstance, StaticTile, TileData};
use shard_core::{Point2D, Point3D};
use std::collections::HashMap;
use std::sync::Arc;

/// Static objects by map cell
#[derive(Debug, Clone)]
pub struct StaticsIndex {
    cells: HashMap<Point2D, Vec<StaticInstance>>,
    tiles: Arc<TileData>,
    count: usize,
}

impl StaticsIndex {
    pub fn new(tiles: Arc<TileData>) -> Self {
        Self {
            cells: HashMap::new(),
            tiles,
            count: 0,
        }
    }

    /// Place an object, after everything already on its cell
    pub fn add(&mut self, type_id: u16, location: Point3D) {
        self.cells
            .entry(location.xy())
            .or_default()
            .push(StaticInstance::new(type_id, location));
        self.count += 1;
    }

    /// Remove the first matching object
    ///
    /// # Returns
    /// `true` if an object was removed
    pub fn remove(&mut self, type_id: u16, location: Point3D) -> bool {
        let Some(list) = self.cells.get_mut(&location.xy()) else {
            return false;
        };
        let Some(pos) = list
            .iter()
            .position(|sta| sta.type_id == type_id && sta.location == location)
        else {
            return false;
        };

        list.remove(pos);
        if list.is_empty() {
            self.cells.remove(&location.xy());
        }
        self.count -= 1;
        true
    }

    /// Borrow the objects on a cell
    pub fn at(&self, at: Point2D) -> &[StaticInstance] {
        self.cells.get(&at).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tiles(&self) -> &Arc<TileData> {
        &self.tiles
    }

    /// Total number of placed objects
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl StaticsService for StaticsIndex {
    fn instances_at(&self, at: Point2D) -> Vec<StaticInstance> {
        self.at(at).to_vec()
    }

    fn descriptor_of(&self, type_id: u16) -> Result<&StaticTile> {
        self.tiles.static_tile(type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldError;

    #[test]
    fn test_insertion_order_kept() {
        let mut index = StaticsIndex::new(Arc::new(TileData::new()));
        index.add(3, Point3D::new(1, 1, 0));
        index.add(1, Point3D::new(1, 1, 5));
        index.add(2, Point3D::new(1, 1, 0));
        index.add(9, Point3D::new(2, 1, 0));

        let types: Vec<u16> = index
            .instances_at(Point2D::new(1, 1))
            .iter()
            .map(|sta| sta.type_id)
            .collect();
        assert_eq!(types, vec![3, 1, 2]);
        assert_eq!(index.len(), 4);
        assert!(index.instances_at(Point2D::new(5, 5)).is_empty());
    }

    #[test]
    fn test_remove() {
        let mut index = StaticsIndex::new(Arc::new(TileData::new()));
        index.add(3, Point3D::new(1, 1, 0));
        index.add(3, Point3D::new(1, 1, 4));

        assert!(!index.remove(3, Point3D::new(1, 1, 2)));
        assert!(index.remove(3, Point3D::new(1, 1, 0)));
        assert_eq!(index.at(Point2D::new(1, 1)).len(), 1);
        assert!(index.remove(3, Point3D::new(1, 1, 4)));
        assert!(index.is_empty());
        assert!(!index.remove(3, Point3D::new(1, 1, 4)));
    }

    #[test]
    fn test_descriptor_miss() {
        let index = StaticsIndex::new(Arc::new(TileData::new()));
        assert!(matches!(
            index.descriptor_of(7),
            Err(WorldError::UnknownStaticTile(7))
        ));
    }
}
