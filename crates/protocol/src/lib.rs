//! # Shard Protocol Library
//!
//! Encoders for the object-state packets of the legacy client protocol,
//! byte-exact with what the client expects.
//!
//! ## Architecture
//!
//! ### 1. Codecs Layer ([`codecs`])
//! Fixed-width big-endian field writers and the 4-byte packet header
//! (`id`, total length word, padding byte).
//!
//! ### 2. Packet Types ([`packets`])
//! Packet ids and declared lengths:
//! - SendObject (0x35): 21 bytes
//! - ItemInContainer (0x43): 23 bytes
//! - FullItemsContainer (0x71): 6 + 19 per item
//!
//! ### 3. Sendable Objects ([`sendable`])
//! Capability traits entities implement and the immutable snapshots the
//! builders consume.
//!
//! ### 4. Packet Builders ([`packet_builder`])
//! One function per packet kind writing into a [`bytes::BytesMut`].
//!
//! ## Usage Example
//!
//! ```rust
//! use shard_protocol::*;
//! use shard_core::{Graphic, Hue, Point3D, Serial};
//! use bytes::BytesMut;
//!
//! let backpack = ItemSnapshot {
//!     serial: Serial::new(0x4000_0001),
//!     graphic: Graphic::new(0x0E75),
//!     location: Point3D::new(0, 0, 0),
//!     hue: Hue::default(),
//!     amount: 1,
//! };
//!
//! let mut buf = BytesMut::new();
//! build_full_items_container(&mut buf, &[], &backpack).unwrap();
//! assert_eq!(&buf[..], &[0x71, 0x00, 0x06, 0x00, 0x00, 0x00]);
//! ```

pub mod codecs;
pub mod packets;
pub mod sendable;
pub mod packet_builder;

// Re-export commonly used items
pub use codecs::*;
pub use packets::*;
pub use sendable::*;
pub use packet_builder::*;
