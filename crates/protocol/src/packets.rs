//! # Packet Definitions
//!
//! Packet ids and declared lengths for the object-state messages the server
//! sends to the client.
//!
//! ## Framing
//!
//! Every packet starts with a 4-byte header:
//! ```text
//! {BYTE id}{WORD length}{BYTE 0}
//! ```
//! `length` is the size of the whole packet, header included. All multi-byte
//! fields are big-endian. Packets with a fixed layout always carry the same
//! length; the client rejects anything else.

// Re-export codecs
pub use super::codecs::*;

/// Packet type enumeration for server-to-client object packets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PacketTypeOut {
    /// Announce an object (item or mobile) lying in the world
    ///
    /// # Packet Format
    /// ```text
    /// {0x35}{WORD 21}{BYTE 0}
    /// {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
    /// {WORD x}{WORD y}{BYTE facing}{SBYTE z}{WORD hue}
    /// ```
    ///
    /// # Fields
    /// - `amount`: stack size, 0 for anything that is not an item
    /// - `facing`: direction byte, 0 for anything that is not a mobile
    SendObject = 0x35,

    /// Place a single item inside a container
    ///
    /// # Packet Format
    /// ```text
    /// {0x43}{WORD 23}{BYTE 0}
    /// {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
    /// {WORD x}{WORD y}{DWORD container}{WORD hue}
    /// ```
    ///
    /// `x` and `y` are the item's position inside the container gump.
    ItemInContainer = 0x43,

    /// Full content listing of a container
    ///
    /// # Packet Format
    /// ```text
    /// {0x71}{WORD 6 + 19 * count}{BYTE 0}{WORD count}
    /// count * {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
    ///         {WORD x}{WORD y}{DWORD container}{WORD hue}
    /// ```
    FullItemsContainer = 0x71,
}

impl PacketTypeOut {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x35 => Some(PacketTypeOut::SendObject),
            0x43 => Some(PacketTypeOut::ItemInContainer),
            0x71 => Some(PacketTypeOut::FullItemsContainer),
            _ => None,
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Declared total length for fixed-size packets
    ///
    /// Returns `None` for packets whose length depends on their content.
    pub fn fixed_length(self) -> Option<u16> {
        match self {
            PacketTypeOut::SendObject => Some(SEND_OBJECT_LEN),
            PacketTypeOut::ItemInContainer => Some(ITEM_IN_CONTAINER_LEN),
            PacketTypeOut::FullItemsContainer => None,
        }
    }
}

/// Total length of a SendObject packet
pub const SEND_OBJECT_LEN: u16 = 0x15;

/// Total length of an ItemInContainer packet
pub const ITEM_IN_CONTAINER_LEN: u16 = 0x17;

/// Size of one item entry in a FullItemsContainer packet
pub const CONTAINER_ENTRY_LEN: usize = 19;

/// Declared length of a FullItemsContainer packet holding `count` items
///
/// Returns `None` if the count or the resulting length does not fit the
/// 16-bit wire fields.
pub fn full_items_container_len(count: usize) -> Option<u16> {
    let count = u16::try_from(count).ok()?;
    let total = HEADER_LEN + 2 + count as usize * CONTAINER_ENTRY_LEN;
    u16::try_from(total).ok()
}
