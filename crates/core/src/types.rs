//! Core type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// First serial handed out to items; everything below belongs to mobiles
pub const ITEM_SERIAL_BASE: u32 = 0x4000_0000;

/// Object serial (32-bit unsigned), the wire address of a game object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Serial(pub u32);

impl Serial {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Check if this serial lies in the item range
    pub fn is_item(&self) -> bool {
        self.0 >= ITEM_SERIAL_BASE
    }

    /// Check if this serial lies in the mobile range
    pub fn is_mobile(&self) -> bool {
        self.0 > 0 && self.0 < ITEM_SERIAL_BASE
    }
}

impl From<u32> for Serial {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Graphic (art) id of an object (16-bit unsigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Graphic(pub u16);

impl Graphic {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Graphic {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

/// Colour hue of an object (16-bit unsigned, 0 = default colouring)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hue(pub u16);

impl Hue {
    pub const fn new(hue: u16) -> Self {
        Self(hue)
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl From<u16> for Hue {
    fn from(hue: u16) -> Self {
        Self(hue)
    }
}
