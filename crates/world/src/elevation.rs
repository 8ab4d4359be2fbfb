//! Movement elevation resolver
//!
//! Decides whether an actor standing at a 3D point may step one tile in a
//! direction, and at which elevation it ends up. The decision only reads
//! the terrain and statics services; it never mutates anything, so a move
//! can be re-resolved at any time with the same result.
//!
//! ## Rules for one cardinal step
//!
//! The actor occupies `[z, z + CHARACTER_HEIGHT]`. Objects on the target
//! cell are scanned in service order:
//! - objects starting above the actor's head are ignored
//! - objects in the actor's way block if impassable and not a surface, or
//!   if they are stairs reaching the actor's head
//! - objects ending above the head are ignored otherwise
//! - objects whose top is at most `MAX_CLIMB` above the actor's feet are
//!   perch candidates; the highest wins, later objects win ties
//!
//! Without a perch the ground decides: impassable land, or land higher than
//! `CHARACTER_HEIGHT + MAX_CLIMB`, blocks.
//!
//! ## Diagonal steps
//!
//! Both cardinal components must be walkable from the same source before
//! the diagonal cell itself is resolved, so corners cannot be cut.

use crate::error::Result;
use crate::services::{StaticsService, TerrainService};
use shard_core::{Direction, Point2D, Point3D};
use std::fmt;

/// Height an actor occupies above its feet
pub const CHARACTER_HEIGHT: i32 = 10;

/// Highest step an actor can climb onto
pub const MAX_CLIMB: i32 = 7;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Destination is not on the map
    OutOfBounds,

    /// An impassable, non-surface object is in the way
    Obstacle { type_id: u16 },

    /// A stair reaching the actor's head is in the way
    Stair { type_id: u16 },

    /// No perch and the ground is impassable or too high
    Terrain,

    /// A diagonal move whose cardinal component `via` is blocked
    CornerCut { via: Direction },
}

/// Outcome of a move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Walkable(Point3D),
    Blocked(BlockReason),
}

impl Resolution {
    /// The resolved position, if the move is legal
    pub fn destination(&self) -> Option<Point3D> {
        match self {
            Resolution::Walkable(point) => Some(*point),
            Resolution::Blocked(_) => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Resolution::Blocked(_))
    }
}

/// One decision taken while resolving a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Checking a cardinal component of a diagonal move
    CheckingCorner { via: Direction },
    OutOfBounds { at: Point2D },
    StartsAbove { type_id: u16 },
    BlockedByObstacle { type_id: u16 },
    BlockedByStair { type_id: u16, top: i32, head: i32 },
    EndsAbove { type_id: u16 },
    TooHighToClimb { type_id: u16, climb: i32 },
    /// New standing candidate
    Candidate { type_id: u16, z: i32, climb: i32 },
    /// Walkable, but lower than the current candidate
    BelowCandidate { type_id: u16, z: i32 },
    TerrainBlocks { ground: i32, impassable: bool },
    Standing { z: i32, on: Option<u16> },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TraceEvent::CheckingCorner { via } => write!(f, "checking corner via {:?}", via),
            TraceEvent::OutOfBounds { at } => write!(f, "{} is outside the map", at),
            TraceEvent::StartsAbove { type_id } => {
                write!(f, "ignoring 0x{:04X}: starts above us", type_id)
            }
            TraceEvent::BlockedByObstacle { type_id } => {
                write!(f, "0x{:04X} blocks: impassable and in our way", type_id)
            }
            TraceEvent::BlockedByStair { type_id, top, head } => write!(
                f,
                "0x{:04X} blocks: stair in our way ({} / {})",
                type_id, top, head
            ),
            TraceEvent::EndsAbove { type_id } => {
                write!(f, "ignoring 0x{:04X}: ends above us", type_id)
            }
            TraceEvent::TooHighToClimb { type_id, climb } => {
                write!(f, "ignoring 0x{:04X}: can't climb {}", type_id, climb)
            }
            TraceEvent::Candidate { type_id, z, climb } => write!(
                f,
                "0x{:04X} is new standing position at z={} (climb {})",
                type_id, z, climb
            ),
            TraceEvent::BelowCandidate { type_id, z } => {
                write!(f, "ignoring 0x{:04X} at z={}: already higher", type_id, z)
            }
            TraceEvent::TerrainBlocks { ground, impassable } => write!(
                f,
                "land blocks (z={}, impassable={})",
                ground, impassable
            ),
            TraceEvent::Standing { z, on: Some(type_id) } => {
                write!(f, "standing on 0x{:04X} at z={}", type_id, z)
            }
            TraceEvent::Standing { z, on: None } => write!(f, "standing on land at z={}", z),
        }
    }
}

/// Decision log of one move attempt
#[derive(Debug, Clone, Default)]
pub struct MoveTrace {
    enabled: bool,
    events: Vec<TraceEvent>,
}

impl MoveTrace {
    /// A trace that records events
    pub fn new() -> Self {
        Self {
            enabled: true,
            events: Vec::new(),
        }
    }

    /// A trace that drops everything
    pub fn disabled() -> Self {
        Self::default()
    }

    #[inline]
    fn record(&mut self, event: impl FnOnce() -> TraceEvent) {
        if self.enabled {
            self.events.push(event());
        }
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

/// Resolves moves against a terrain and a statics service
pub struct ElevationResolver<'a, T: ?Sized, S: ?Sized> {
    terrain: &'a T,
    statics: &'a S,
}

impl<'a, T: ?Sized, S: ?Sized> Clone for ElevationResolver<'a, T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: ?Sized, S: ?Sized> Copy for ElevationResolver<'a, T, S> {}

impl<'a, T, S> ElevationResolver<'a, T, S>
where
    T: TerrainService + ?Sized,
    S: StaticsService + ?Sized,
{
    pub fn new(terrain: &'a T, statics: &'a S) -> Self {
        Self { terrain, statics }
    }

    /// Resolve a step from `source` in `dir`
    ///
    /// # Returns
    /// `Walkable` with the destination, or `Blocked` with the reason.
    ///
    /// # Errors
    /// Only for inconsistent world data, e.g. an object whose type id has
    /// no descriptor.
    pub fn resolve(&self, source: Point3D, dir: Direction) -> Result<Resolution> {
        self.resolve_with(source, dir, &mut MoveTrace::disabled())
    }

    /// Like [`resolve`](Self::resolve), also returning every decision taken
    pub fn resolve_traced(
        &self,
        source: Point3D,
        dir: Direction,
    ) -> Result<(Resolution, MoveTrace)> {
        let mut trace = MoveTrace::new();
        let resolution = self.resolve_with(source, dir, &mut trace)?;
        Ok((resolution, trace))
    }

    fn resolve_with(
        &self,
        source: Point3D,
        dir: Direction,
        trace: &mut MoveTrace,
    ) -> Result<Resolution> {
        if let Some((vertical, horizontal)) = dir.cardinal_components() {
            for via in [vertical, horizontal] {
                trace.record(|| TraceEvent::CheckingCorner { via });
                if self.step(source, via, trace)?.is_blocked() {
                    return Ok(Resolution::Blocked(BlockReason::CornerCut { via }));
                }
            }
        }
        self.step(source, dir, trace)
    }

    /// Resolve a single step without corner checks
    fn step(&self, source: Point3D, dir: Direction, trace: &mut MoveTrace) -> Result<Resolution> {
        let dest = source.xy().translated(dir);
        if !self.terrain.contains(dest) {
            trace.record(|| TraceEvent::OutOfBounds { at: dest });
            return Ok(Resolution::Blocked(BlockReason::OutOfBounds));
        }
        let map_z = self.terrain.elevation(dest)?;

        let char_lower_z = source.z;
        let char_upper_z = char_lower_z + CHARACTER_HEIGHT;
        let mut walk_on: Option<u16> = None;
        let mut final_z = map_z;

        for sta in self.statics.instances_at(dest) {
            let tile = self.statics.descriptor_of(sta.type_id)?;
            let type_id = sta.type_id;
            let sta_lower_z = sta.location.z;
            let sta_upper_z = sta_lower_z + tile.height as i32;
            let climb = sta_upper_z - char_lower_z;

            if sta_lower_z > char_upper_z {
                trace.record(|| TraceEvent::StartsAbove { type_id });
                continue;
            }

            let ends_below_us = sta_upper_z <= char_lower_z;
            let in_our_way =
                (sta_lower_z < char_upper_z && !ends_below_us) || sta_lower_z == char_lower_z;

            if in_our_way {
                if tile.is_impassable() && !tile.is_surface() {
                    trace.record(|| TraceEvent::BlockedByObstacle { type_id });
                    return Ok(Resolution::Blocked(BlockReason::Obstacle { type_id }));
                } else if tile.is_stair() && sta_upper_z >= char_upper_z {
                    trace.record(|| TraceEvent::BlockedByStair {
                        type_id,
                        top: sta_upper_z,
                        head: char_upper_z,
                    });
                    return Ok(Resolution::Blocked(BlockReason::Stair { type_id }));
                }
            }

            if sta_upper_z > char_upper_z {
                trace.record(|| TraceEvent::EndsAbove { type_id });
                continue;
            }

            if climb > MAX_CLIMB {
                trace.record(|| TraceEvent::TooHighToClimb { type_id, climb });
                continue;
            }

            if sta_upper_z >= final_z {
                trace.record(|| TraceEvent::Candidate {
                    type_id,
                    z: sta_upper_z,
                    climb,
                });
                walk_on = Some(type_id);
                final_z = sta_upper_z;
            } else {
                trace.record(|| TraceEvent::BelowCandidate {
                    type_id,
                    z: sta_upper_z,
                });
            }
        }

        // Land only decides when no object offered a perch
        if walk_on.is_none() {
            let land = self.terrain.tile_at(dest)?;
            if land.impassable || map_z > CHARACTER_HEIGHT + MAX_CLIMB {
                trace.record(|| TraceEvent::TerrainBlocks {
                    ground: map_z,
                    impassable: land.impassable,
                });
                return Ok(Resolution::Blocked(BlockReason::Terrain));
            }
        }

        trace.record(|| TraceEvent::Standing {
            z: final_z,
            on: walk_on,
        });
        Ok(Resolution::Walkable(dest.with_z(final_z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorldError;
    use crate::map::{MapCell, TerrainMap};
    use crate::statics::StaticsIndex;
    use crate::tiles::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::sync::Arc;

    const GRASS: u16 = 0;
    const WATER: u16 = 1;

    const BOX: u16 = 0x01;
    const STAIRS: u16 = 0x02;
    const WALL: u16 = 0x03;
    const TABLE: u16 = 0x04;
    const ROOF: u16 = 0x05;
    const FLOOR: u16 = 0x06;
    const CRATE: u16 = 0x07;
    const TALL_PLANT: u16 = 0x08;
    const BANNER: u16 = 0x09;
    const LOW_STEP: u16 = 0x0A;

    fn tiles() -> Arc<TileData> {
        let mut tiles = TileData::new();
        tiles.insert_land(GRASS, LandTile::new("grass", 0));
        tiles.insert_land(WATER, LandTile::new("water", FLAG_IMPASSABLE));

        tiles.insert_static(BOX, StaticTile::new("box", 0, 5));
        tiles.insert_static(STAIRS, StaticTile::new("stairs", FLAG_STAIR | FLAG_SURFACE, 10));
        tiles.insert_static(WALL, StaticTile::new("wall", FLAG_IMPASSABLE, 20));
        tiles.insert_static(TABLE, StaticTile::new("table", FLAG_IMPASSABLE | FLAG_SURFACE, 6));
        tiles.insert_static(ROOF, StaticTile::new("roof", FLAG_IMPASSABLE, 1));
        tiles.insert_static(FLOOR, StaticTile::new("floor", FLAG_SURFACE, 0));
        tiles.insert_static(CRATE, StaticTile::new("crate", 0, 5));
        tiles.insert_static(TALL_PLANT, StaticTile::new("tall plant", 0, 8));
        tiles.insert_static(BANNER, StaticTile::new("banner", 0, 12));
        tiles.insert_static(LOW_STEP, StaticTile::new("low step", FLAG_STAIR, 5));
        Arc::new(tiles)
    }

    struct Fixture {
        map: TerrainMap,
        statics: StaticsIndex,
    }

    impl Fixture {
        fn new() -> Self {
            let tiles = tiles();
            Self {
                map: TerrainMap::with_fill(16, 16, MapCell::new(GRASS, 0), tiles.clone()),
                statics: StaticsIndex::new(tiles),
            }
        }

        fn place(&mut self, type_id: u16, x: i32, y: i32, z: i32) -> &mut Self {
            self.statics.add(type_id, Point3D::new(x, y, z));
            self
        }

        fn ground(&mut self, x: i32, y: i32, land_id: u16, z: i8) -> &mut Self {
            self.map
                .set_cell(Point2D::new(x, y), MapCell::new(land_id, z))
                .unwrap();
            self
        }

        fn resolve(&self, source: Point3D, dir: Direction) -> Resolution {
            ElevationResolver::new(&self.map, &self.statics)
                .resolve(source, dir)
                .unwrap()
        }

        fn trace(&self, source: Point3D, dir: Direction) -> Vec<TraceEvent> {
            let (_, trace) = ElevationResolver::new(&self.map, &self.statics)
                .resolve_traced(source, dir)
                .unwrap();
            trace.into_events()
        }
    }

    const START: Point3D = Point3D::new(5, 5, 0);

    #[test]
    fn test_open_ground() {
        let fx = Fixture::new();
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 0))
        );
        assert_eq!(
            fx.resolve(START, Direction::North),
            Resolution::Walkable(Point3D::new(5, 4, 0))
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let fx = Fixture::new();
        let corner = Point3D::new(0, 0, 0);
        for dir in [Direction::North, Direction::West] {
            assert_eq!(
                fx.resolve(corner, dir),
                Resolution::Blocked(BlockReason::OutOfBounds)
            );
        }

        let far = Point3D::new(15, 15, 0);
        assert_eq!(
            fx.resolve(far, Direction::South),
            Resolution::Blocked(BlockReason::OutOfBounds)
        );
    }

    #[test]
    fn test_impassable_terrain_blocks() {
        let mut fx = Fixture::new();
        fx.ground(6, 5, WATER, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Terrain)
        );
    }

    #[test]
    fn test_terrain_too_high_blocks() {
        let mut fx = Fixture::new();
        fx.ground(6, 5, GRASS, 18);
        let source = Point3D::new(5, 5, 15);
        assert_eq!(
            fx.resolve(source, Direction::East),
            Resolution::Blocked(BlockReason::Terrain)
        );

        // 17 is still fine
        fx.ground(6, 5, GRASS, 17);
        assert_eq!(
            fx.resolve(source, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 17))
        );
    }

    #[test]
    fn test_walking_down_to_ground() {
        let fx = Fixture::new();
        let source = Point3D::new(5, 5, 10);
        assert_eq!(
            fx.resolve(source, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 0))
        );
    }

    #[test]
    fn test_climb_onto_box() {
        let mut fx = Fixture::new();
        fx.place(BOX, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 5))
        );
    }

    #[test]
    fn test_climb_onto_surface() {
        let mut fx = Fixture::new();
        fx.place(TABLE, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 6))
        );
    }

    #[test]
    fn test_stairs_reaching_head_block() {
        let mut fx = Fixture::new();
        fx.place(STAIRS, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Stair { type_id: STAIRS })
        );
    }

    #[test]
    fn test_stairs_block_regardless_of_other_flags() {
        for flags in [
            FLAG_STAIR,
            FLAG_STAIR | FLAG_SURFACE,
            FLAG_STAIR | FLAG_IMPASSABLE,
            FLAG_STAIR | FLAG_IMPASSABLE | FLAG_SURFACE,
        ] {
            let mut tiles = (*tiles()).clone();
            tiles.insert_static(0x40, StaticTile::new("steps", flags, 12));
            let tiles = Arc::new(tiles);
            let map = TerrainMap::with_fill(16, 16, MapCell::new(GRASS, 0), tiles.clone());
            let mut statics = StaticsIndex::new(tiles);
            statics.add(0x40, Point3D::new(6, 5, 2));

            let resolution = ElevationResolver::new(&map, &statics)
                .resolve(START, Direction::East)
                .unwrap();
            assert!(resolution.is_blocked(), "flags {:#x} should block", flags);
        }
    }

    #[test]
    fn test_low_stair_is_climbable() {
        let mut fx = Fixture::new();
        fx.place(LOW_STEP, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 5))
        );
    }

    #[test]
    fn test_wall_blocks_and_stops_scanning() {
        let mut fx = Fixture::new();
        fx.place(WALL, 6, 5, 0).place(BOX, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Obstacle { type_id: WALL })
        );

        let events = fx.trace(START, Direction::East);
        assert_eq!(events, vec![TraceEvent::BlockedByObstacle { type_id: WALL }]);
    }

    #[test]
    fn test_wall_below_feet_does_not_block() {
        let mut fx = Fixture::new();
        // Wall top at 20, actor standing on it at 20
        fx.place(WALL, 6, 5, 0);
        let source = Point3D::new(5, 5, 20);
        assert_eq!(
            fx.resolve(source, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 20))
        );
    }

    #[test]
    fn test_objects_above_head_are_ignored() {
        let mut fx = Fixture::new();
        fx.place(ROOF, 6, 5, 11);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 0))
        );

        // Starting just below head height is in the way
        let mut fx = Fixture::new();
        fx.place(ROOF, 6, 5, 9);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Obstacle { type_id: ROOF })
        );
    }

    #[test]
    fn test_too_high_to_climb_keeps_ground() {
        let mut fx = Fixture::new();
        fx.place(TALL_PLANT, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 0))
        );
        assert!(fx
            .trace(START, Direction::East)
            .contains(&TraceEvent::TooHighToClimb { type_id: TALL_PLANT, climb: 8 }));
    }

    #[test]
    fn test_highest_perch_wins() {
        let mut fx = Fixture::new();
        fx.place(TABLE, 6, 5, 0).place(BOX, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 6))
        );

        let mut fx = Fixture::new();
        fx.place(BOX, 6, 5, 0).place(TABLE, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 6))
        );
    }

    #[test]
    fn test_equal_perches_last_scanned_wins() {
        let mut fx = Fixture::new();
        fx.place(BOX, 6, 5, 0).place(CRATE, 6, 5, 0);
        let events = fx.trace(START, Direction::East);
        assert_eq!(
            events.last(),
            Some(&TraceEvent::Standing { z: 5, on: Some(CRATE) })
        );

        let mut fx = Fixture::new();
        fx.place(CRATE, 6, 5, 0).place(BOX, 6, 5, 0);
        let events = fx.trace(START, Direction::East);
        assert_eq!(
            events.last(),
            Some(&TraceEvent::Standing { z: 5, on: Some(BOX) })
        );
    }

    #[test]
    fn test_perch_overrides_impassable_terrain() {
        let mut fx = Fixture::new();
        fx.ground(6, 5, WATER, 0).place(FLOOR, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 0))
        );
    }

    #[test]
    fn test_perch_overrides_high_terrain() {
        let mut fx = Fixture::new();
        fx.ground(6, 5, GRASS, 18).place(FLOOR, 6, 5, 18);
        let source = Point3D::new(5, 5, 15);
        assert_eq!(
            fx.resolve(source, Direction::East),
            Resolution::Walkable(Point3D::new(6, 5, 18))
        );
    }

    #[test]
    fn test_unclimbed_passable_object_does_not_save_terrain() {
        // A passable banner stands on the water but offers no perch
        let mut fx = Fixture::new();
        fx.ground(6, 5, WATER, 0).place(BANNER, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Terrain)
        );

        // Same for an object too tall to climb
        let mut fx = Fixture::new();
        fx.ground(6, 5, WATER, 0).place(TALL_PLANT, 6, 5, 0);
        assert_eq!(
            fx.resolve(START, Direction::East),
            Resolution::Blocked(BlockReason::Terrain)
        );
    }

    #[test]
    fn test_diagonal_needs_both_corners() {
        // Offsets of the vertical and horizontal neighbour for each diagonal
        for dir in Direction::ALL.into_iter().filter(|d| d.is_diagonal()) {
            let (vertical, horizontal) = dir.cardinal_components().unwrap();
            for blocked in [vertical, horizontal] {
                let mut fx = Fixture::new();
                let corner = START.xy().translated(blocked);
                fx.place(WALL, corner.x, corner.y, 0);

                assert_eq!(
                    fx.resolve(START, dir),
                    Resolution::Blocked(BlockReason::CornerCut { via: blocked }),
                    "{:?} via {:?}",
                    dir,
                    blocked
                );
            }

            let fx = Fixture::new();
            assert_eq!(
                fx.resolve(START, dir).destination(),
                Some(START.translated(dir))
            );
        }
    }

    #[test]
    fn test_diagonal_corner_check_skips_target() {
        let mut fx = Fixture::new();
        fx.place(WALL, 5, 4, 0).place(0x99, 6, 4, 0);

        // The unknown object on the diagonal cell is never looked at
        assert_eq!(
            fx.resolve(START, Direction::NorthEast),
            Resolution::Blocked(BlockReason::CornerCut { via: Direction::North })
        );
    }

    #[test]
    fn test_diagonal_target_still_checked() {
        let mut fx = Fixture::new();
        fx.place(WALL, 6, 4, 0);
        assert_eq!(
            fx.resolve(START, Direction::NorthEast),
            Resolution::Blocked(BlockReason::Obstacle { type_id: WALL })
        );

        let mut fx = Fixture::new();
        fx.place(BOX, 6, 4, 0);
        assert_eq!(
            fx.resolve(START, Direction::NorthEast),
            Resolution::Walkable(Point3D::new(6, 4, 5))
        );
    }

    #[test]
    fn test_diagonal_trace_order() {
        let fx = Fixture::new();
        let events = fx.trace(START, Direction::SouthWest);
        assert_eq!(
            events,
            vec![
                TraceEvent::CheckingCorner { via: Direction::South },
                TraceEvent::Standing { z: 0, on: None },
                TraceEvent::CheckingCorner { via: Direction::West },
                TraceEvent::Standing { z: 0, on: None },
                TraceEvent::Standing { z: 0, on: None },
            ]
        );
    }

    #[test]
    fn test_unknown_descriptor_is_an_error() {
        let mut fx = Fixture::new();
        fx.place(0x99, 6, 5, 0);
        let result = ElevationResolver::new(&fx.map, &fx.statics).resolve(START, Direction::East);
        assert!(matches!(result, Err(WorldError::UnknownStaticTile(0x99))));
    }

    #[test]
    fn test_traced_matches_untraced() {
        let mut fx = Fixture::new();
        fx.place(BOX, 6, 5, 0).place(ROOF, 6, 5, 30).place(TALL_PLANT, 6, 5, 0);
        let resolver = ElevationResolver::new(&fx.map, &fx.statics);

        let plain = resolver.resolve(START, Direction::East).unwrap();
        let (traced, trace) = resolver.resolve_traced(START, Direction::East).unwrap();
        assert_eq!(plain, traced);
        assert_eq!(
            trace.events(),
            &[
                TraceEvent::Candidate { type_id: BOX, z: 5, climb: 5 },
                TraceEvent::StartsAbove { type_id: ROOF },
                TraceEvent::TooHighToClimb { type_id: TALL_PLANT, climb: 8 },
                TraceEvent::Standing { z: 5, on: Some(BOX) },
            ]
        );

        // Resolving again gives the same answer
        assert_eq!(resolver.resolve(START, Direction::East).unwrap(), plain);
    }

    #[test]
    fn test_objects_above_head_never_change_outcome() {
        let types = [BOX, STAIRS, WALL, TABLE, ROOF, FLOOR, CRATE, TALL_PLANT, BANNER, LOW_STEP];
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for _ in 0..500 {
            let source = Point3D::new(5, 5, rng.gen_range(-5..20));
            let dir = Direction::ALL[rng.gen_range(0..8usize)];
            let head = source.z + CHARACTER_HEIGHT;

            let mut base = Fixture::new();
            let mut with_above = Fixture::new();
            for x in 4..=6 {
                for y in 4..=6 {
                    let land = if rng.gen_bool(0.2) { WATER } else { GRASS };
                    let z = rng.gen_range(-5..20) as i8;
                    base.ground(x, y, land, z);
                    with_above.ground(x, y, land, z);

                    for _ in 0..rng.gen_range(0..4) {
                        let type_id = types[rng.gen_range(0..types.len())];
                        let z = rng.gen_range(-5..=head);
                        base.place(type_id, x, y, z);
                        with_above.place(type_id, x, y, z);
                        if rng.gen_bool(0.5) {
                            let above = types[rng.gen_range(0..types.len())];
                            with_above.place(above, x, y, rng.gen_range(head + 1..head + 30));
                        }
                    }
                }
            }

            assert_eq!(
                base.resolve(source, dir),
                with_above.resolve(source, dir),
                "source {:?} dir {:?}",
                source,
                dir
            );
        }
    }

    #[test]
    fn test_trace_display() {
        assert_eq!(
            TraceEvent::Standing { z: 5, on: Some(BOX) }.to_string(),
            "standing on 0x0001 at z=5"
        );
        assert_eq!(
            TraceEvent::TerrainBlocks { ground: 0, impassable: true }.to_string(),
            "land blocks (z=0, impassable=true)"
        );
    }
}
