//! Position and direction types for world objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile coordinate on the world map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring tile one step in `dir`
    pub const fn translated(self, dir: Direction) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Lift this tile to a 3D point at elevation `z`
    pub const fn with_z(self, z: i32) -> Point3D {
        Point3D {
            x: self.x,
            y: self.y,
            z,
        }
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile coordinate plus elevation
///
/// `z` is measured in abstract height units, the same units used by
/// terrain elevation and object heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Drop the elevation
    pub const fn xy(self) -> Point2D {
        Point2D {
            x: self.x,
            y: self.y,
        }
    }

    /// One step in `dir`, keeping the elevation
    pub const fn translated(self, dir: Direction) -> Self {
        self.xy().translated(dir).with_z(self.z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The eight walking directions
///
/// Discriminants are the facing bytes used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Unit step `(dx, dy)`; north is towards smaller `y`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::NorthEast => (1, -1),
            Self::East => (1, 0),
            Self::SouthEast => (1, 1),
            Self::South => (0, 1),
            Self::SouthWest => (-1, 1),
            Self::West => (-1, 0),
            Self::NorthWest => (-1, -1),
        }
    }

    pub const fn is_diagonal(self) -> bool {
        (self as u8) % 2 == 1
    }

    /// Split a diagonal into its north/south and east/west parts
    ///
    /// Returns `None` for cardinal directions.
    pub const fn cardinal_components(self) -> Option<(Direction, Direction)> {
        let (dx, dy) = self.offset();
        if dx == 0 || dy == 0 {
            return None;
        }
        let vertical = if dy < 0 { Self::North } else { Self::South };
        let horizontal = if dx > 0 { Self::East } else { Self::West };
        Some((vertical, horizontal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation() {
        let origin = Point2D::new(10, 10);
        assert_eq!(origin.translated(Direction::North), Point2D::new(10, 9));
        assert_eq!(origin.translated(Direction::East), Point2D::new(11, 10));
        assert_eq!(origin.translated(Direction::SouthWest), Point2D::new(9, 11));

        let p = Point3D::new(5, 5, 7);
        assert_eq!(p.translated(Direction::NorthWest), Point3D::new(4, 4, 7));
    }

    #[test]
    fn test_cardinal_components() {
        assert_eq!(Direction::North.cardinal_components(), None);
        assert_eq!(
            Direction::NorthEast.cardinal_components(),
            Some((Direction::North, Direction::East))
        );
        assert_eq!(
            Direction::SouthWest.cardinal_components(),
            Some((Direction::South, Direction::West))
        );

        // The components always add up to the diagonal step
        for dir in Direction::ALL.iter().copied().filter(|d| d.is_diagonal()) {
            let (a, b) = dir.cardinal_components().unwrap();
            let p = Point2D::default().translated(a).translated(b);
            assert_eq!(p, Point2D::default().translated(dir));
        }
    }

    #[test]
    fn test_direction_bytes() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_u8(dir.as_u8()), Some(dir));
        }
        assert_eq!(Direction::South.as_u8(), 4);
        assert_eq!(Direction::from_u8(8), None);
    }
}
