//! In-memory terrain map
//!
//! A rectangular grid of cells, each with a land tile id and a ground
//! elevation, stored in row-major order.

use crate::error::{Result, WorldError};
use crate::services::TerrainService;
use crate::tiles::{TerrainTile, TileData};
use shard_core::Point2D;
use std::sync::Arc;

/// One map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapCell {
    pub land_id: u16,
    pub elevation: i8,
}

impl MapCell {
    pub const fn new(land_id: u16, elevation: i8) -> Self {
        Self { land_id, elevation }
    }
}

/// Terrain of the whole world
#[derive(Debug, Clone)]
pub struct TerrainMap {
    width: u32,
    height: u32,
    cells: Vec<MapCell>,
    tiles: Arc<TileData>,
}

impl TerrainMap {
    /// Create a map with every cell set to `fill`
    pub fn with_fill(width: u32, height: u32, fill: MapCell, tiles: Arc<TileData>) -> Self {
        tracing::debug!("Creating {}x{} terrain map", width, height);

        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
            tiles,
        }
    }

    /// Create a map from row-major cell data
    pub fn from_cells(
        width: u32,
        height: u32,
        cells: Vec<MapCell>,
        tiles: Arc<TileData>,
    ) -> Result<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(WorldError::InvalidMap(format!(
                "{}x{} map needs {} cells, got {}",
                width,
                height,
                expected,
                cells.len()
            )));
        }

        Ok(Self {
            width,
            height,
            cells,
            tiles,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tiles(&self) -> &Arc<TileData> {
        &self.tiles
    }

    #[inline]
    fn index(&self, at: Point2D) -> Option<usize> {
        if at.x < 0 || at.y < 0 || at.x as u32 >= self.width || at.y as u32 >= self.height {
            return None;
        }
        Some(at.y as usize * self.width as usize + at.x as usize)
    }

    /// Get the cell at `at`
    pub fn cell(&self, at: Point2D) -> Result<MapCell> {
        self.index(at)
            .map(|index| self.cells[index])
            .ok_or(WorldError::OutOfBounds(at))
    }

    /// Replace the cell at `at`
    pub fn set_cell(&mut self, at: Point2D, cell: MapCell) -> Result<()> {
        let index = self.index(at).ok_or(WorldError::OutOfBounds(at))?;
        self.cells[index] = cell;
        Ok(())
    }
}

impl TerrainService for TerrainMap {
    fn contains(&self, at: Point2D) -> bool {
        self.index(at).is_some()
    }

    fn elevation(&self, at: Point2D) -> Result<i32> {
        Ok(self.cell(at)?.elevation as i32)
    }

    fn tile_at(&self, at: Point2D) -> Result<TerrainTile> {
        let cell = self.cell(at)?;
        let land = self.tiles.land_tile(cell.land_id)?;

        Ok(TerrainTile {
            elevation: cell.elevation as i32,
            impassable: land.is_impassable(),
            material_id: cell.land_id,
        })
    }
}
