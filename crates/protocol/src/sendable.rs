//! # Sendable Objects
//!
//! The minimal read-only view the packet builders need from live entities.
//!
//! Capabilities are layered traits: anything with a serial, graphic,
//! location and hue is a [`SendableObject`]; an amount makes it a
//! [`SendableItem`]; a facing makes it a [`SendableMobile`].
//!
//! Builders never query capabilities themselves. The caller picks the
//! snapshot constructor once ([`ObjectSnapshot::object`],
//! [`ObjectSnapshot::item`] or [`ObjectSnapshot::mobile`]) and the resulting
//! [`Shape`] tag decides which optional fields go on the wire.

use serde::{Deserialize, Serialize};
use shard_core::{Direction, Graphic, Hue, Point3D, Serial};

/// Anything the client can see
pub trait SendableObject {
    fn serial(&self) -> Serial;
    fn graphic(&self) -> Graphic;
    fn location(&self) -> Point3D;
    fn hue(&self) -> Hue;
}

/// An object that comes in stacks
pub trait SendableItem: SendableObject {
    fn amount(&self) -> u16;
}

/// An object that faces a direction
pub trait SendableMobile: SendableObject {
    fn facing(&self) -> Direction;
}

/// Which optional fields an object snapshot carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Plain,
    Item { amount: u16 },
    Mobile { facing: Direction },
}

/// Immutable snapshot of an object taken at encode time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSnapshot {
    pub serial: Serial,
    pub graphic: Graphic,
    pub location: Point3D,
    pub hue: Hue,
    pub shape: Shape,
}

impl ObjectSnapshot {
    /// Snapshot with no item or mobile fields
    pub fn object<T: SendableObject + ?Sized>(obj: &T) -> Self {
        Self::with_shape(obj, Shape::Plain)
    }

    pub fn item<T: SendableItem + ?Sized>(item: &T) -> Self {
        Self::with_shape(item, Shape::Item { amount: item.amount() })
    }

    pub fn mobile<T: SendableMobile + ?Sized>(mobile: &T) -> Self {
        Self::with_shape(mobile, Shape::Mobile { facing: mobile.facing() })
    }

    fn with_shape<T: SendableObject + ?Sized>(obj: &T, shape: Shape) -> Self {
        Self {
            serial: obj.serial(),
            graphic: obj.graphic(),
            location: obj.location(),
            hue: obj.hue(),
            shape,
        }
    }

    /// Amount field as sent on the wire
    #[inline]
    pub fn wire_amount(&self) -> u16 {
        match self.shape {
            Shape::Item { amount } => amount,
            _ => 0,
        }
    }

    /// Facing byte as sent on the wire
    #[inline]
    pub fn wire_facing(&self) -> u8 {
        match self.shape {
            Shape::Mobile { facing } => facing.as_u8(),
            _ => 0,
        }
    }
}

/// Item-shaped snapshot used by the container packets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub serial: Serial,
    pub graphic: Graphic,
    pub location: Point3D,
    pub hue: Hue,
    pub amount: u16,
}

impl ItemSnapshot {
    pub fn of<T: SendableItem + ?Sized>(item: &T) -> Self {
        Self {
            serial: item.serial(),
            graphic: item.graphic(),
            location: item.location(),
            hue: item.hue(),
            amount: item.amount(),
        }
    }
}

impl From<ItemSnapshot> for ObjectSnapshot {
    fn from(item: ItemSnapshot) -> Self {
        Self {
            serial: item.serial,
            graphic: item.graphic,
            location: item.location,
            hue: item.hue,
            shape: Shape::Item { amount: item.amount },
        }
    }
}

impl SendableObject for ItemSnapshot {
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

impl SendableItem for ItemSnapshot {
    fn amount(&self) -> u16 {
        self.amount
    }
}

impl SendableObject for ObjectSnapshot {
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
