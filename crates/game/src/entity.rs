//! # Live Entities
//!
//! Items and mobiles as the world stores them. Both expose the sendable
//! capability traits so packet builders can snapshot them directly.

use shard_core::{Direction, Graphic, Hue, Point3D, Serial};
use shard_protocol::{SendableItem, SendableMobile, SendableObject};

/// What an item can do besides lying around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Plain,

    /// Holds other items
    Container,
}

/// Where an item currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Created but not placed anywhere yet
    Limbo,

    /// Lying on the map at the item's location
    Ground,

    /// Inside a container; the item's x/y are its position in the gump
    Container(Serial),
}

/// An item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub serial: Serial,
    pub graphic: Graphic,
    pub hue: Hue,
    pub amount: u16,
    pub kind: ItemKind,
    pub location: Point3D,
    pub placement: Placement,
}

impl Item {
    /// Create an item in limbo
    ///
    /// # Arguments
    /// * `serial` - Item serial (from the item range)
    /// * `graphic` - Art id, also used as the static type id while on the ground
    /// * `kind` - Plain item or container
    pub fn new(serial: Serial, graphic: Graphic, kind: ItemKind) -> Self {
        Self {
            serial,
            graphic,
            hue: Hue::default(),
            amount: 1,
            kind,
            location: Point3D::default(),
            placement: Placement::Limbo,
        }
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        self.kind == ItemKind::Container
    }

    #[inline]
    pub fn is_on_ground(&self) -> bool {
        self.placement == Placement::Ground
    }

    /// Serial of the container holding this item
    pub fn container(&self) -> Option<Serial> {
        match self.placement {
            Placement::Container(serial) => Some(serial),
            _ => None,
        }
    }
}

impl SendableObject for Item {
    fn serial(&self) -> Serial {
        self.serial
    }

    fn graphic(&self) -> Graphic {
        self.graphic
    }

    fn location(&self) -> Point3D {
        self.location
    }

    fn hue(&self) -> Hue {
        self.hue
    }
}

impl SendableItem for Item {
    fn amount(&self) -> u16 {
        self.amount
    }
}

/// A mobile (player character or creature)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mobile {
    pub serial: Serial,
    pub name: String,
    pub graphic: Graphic,
    pub hue: Hue,
    pub location: Point3D,
    pub facing: Direction,
}

impl Mobile {
    pub fn new(serial: Serial, name: impl Into<String>, graphic: Graphic, location: Point3D) -> Self {
        Self {
            serial,
            name: name.into(),
            graphic,
            hue: Hue::default(),
            location,
            facing: Direction::South,
        }
    }
}

impl SendableObject for Mobile {
    fn serial(&self) -> Serial {
        self.serial
    }

    fn graphic(&self) -> Graphic {
        self.graphic
    }

    fn location(&self) -> Point3D {
        self.location
    }

    fn hue(&self) -> Hue {
        self.hue
    }
}

impl SendableMobile for Mobile {
    fn facing(&self) -> Direction {
        self.facing
    }
}
