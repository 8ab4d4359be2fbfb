//! # Packet Builder
//!
//! Builder functions for the server-to-client object packets.
//!
//! ## Design Philosophy
//!
//! - **Exact byte compatibility**: every packet is exactly as long as its
//!   declared length and fields appear in wire order
//! - **Snapshots in, bytes out**: builders only read [`ObjectSnapshot`] /
//!   [`ItemSnapshot`] values and never inspect live entities
//! - **No validation** beyond what sizing needs: out-of-range coordinates or
//!   ids are the caller's problem
//!
//! ## Usage
//!
//! ```rust
//! use shard_protocol::packet_builder::*;
//! use shard_protocol::{ObjectSnapshot, Shape};
//! use shard_core::{Graphic, Hue, Point3D, Serial};
//! use bytes::BytesMut;
//!
//! let obj = ObjectSnapshot {
//!     serial: Serial::new(0x10),
//!     graphic: Graphic::new(0x0190),
//!     location: Point3D::new(100, 200, 5),
//!     hue: Hue::default(),
//!     shape: Shape::Plain,
//! };
//! let mut buf = BytesMut::new();
//! build_send_object(&mut buf, &obj);
//! assert_eq!(buf.len(), 21);
//! ```

use bytes::{BufMut, BytesMut};
use shard_core::{Result, Serial, ShardError};

use super::{codecs::*, packets::*};
use crate::sendable::{ItemSnapshot, ObjectSnapshot, SendableObject};

/// Build a send object packet (0x35)
///
/// # Purpose
/// Shows an item or mobile lying in the world to the client. Sent when an
/// object comes into view or any of its visible fields change (including
/// after a move).
///
/// # Packet Format
/// ```text
/// {0x35}{WORD 21}{BYTE 0}
/// {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
/// {WORD x}{WORD y}{BYTE facing}{SBYTE z}{WORD hue}
/// ```
///
/// # Notes
/// - `amount` is 0 unless the snapshot is item-shaped
/// - `facing` is 0 unless the snapshot is mobile-shaped
/// - The byte after the graphic is always 0; the client adds it to the graphic
pub fn build_send_object(buf: &mut BytesMut, obj: &ObjectSnapshot) {
    let start = buf.len();

    write_header(buf, PacketTypeOut::SendObject, SEND_OBJECT_LEN);
    write_serial(buf, obj.serial);
    write_graphic(buf, obj.graphic);
    buf.put_u8(0);
    buf.put_u16(obj.wire_amount());
    write_xy(buf, obj.location);
    buf.put_u8(obj.wire_facing());
    write_z(buf, obj.location.z);
    write_hue(buf, obj.hue);

    debug_assert_eq!(buf.len() - start, SEND_OBJECT_LEN as usize);
}

/// Build an item in container packet (0x43)
///
/// # Purpose
/// Adds or updates one item inside an open container.
///
/// # Packet Format
/// ```text
/// {0x43}{WORD 23}{BYTE 0}
/// {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
/// {WORD x}{WORD y}{DWORD container}{WORD hue}
/// ```
///
/// # Arguments
/// * `buf` - Buffer to write the packet to
/// * `item` - The item being placed
/// * `container` - The container it is placed in (only its serial is sent)
pub fn build_item_in_container<C>(buf: &mut BytesMut, item: &ItemSnapshot, container: &C)
where
    C: SendableObject + ?Sized,
{
    let start = buf.len();

    write_header(buf, PacketTypeOut::ItemInContainer, ITEM_IN_CONTAINER_LEN);
    write_container_entry(buf, item, container.serial());

    debug_assert_eq!(buf.len() - start, ITEM_IN_CONTAINER_LEN as usize);
}

/// Build a full items container packet (0x71)
///
/// # Purpose
/// Sends the complete content listing of a container, e.g. when a player
/// opens a backpack or a corpse.
///
/// # Packet Format
/// ```text
/// {0x71}{WORD 6 + 19 * count}{BYTE 0}{WORD count}
/// count * {DWORD serial}{WORD graphic}{BYTE 0}{WORD amount}
///         {WORD x}{WORD y}{DWORD container}{WORD hue}
/// ```
///
/// # Errors
/// Returns [`ShardError::Protocol`] if the listing cannot be described by
/// the 16-bit count and length fields. Nothing is written in that case.
///
/// # Notes
/// An empty container produces a 6-byte packet with count 0.
pub fn build_full_items_container<C>(
    buf: &mut BytesMut,
    items: &[ItemSnapshot],
    container: &C,
) -> Result<()>
where
    C: SendableObject + ?Sized,
{
    let length = full_items_container_len(items.len()).ok_or_else(|| {
        ShardError::Protocol(format!(
            "Container {} holds {} items, too many for one listing",
            container.serial(),
            items.len()
        ))
    })?;
    let start = buf.len();

    write_header(buf, PacketTypeOut::FullItemsContainer, length);
    buf.put_u16(items.len() as u16);
    let container_serial = container.serial();
    for item in items {
        write_container_entry(buf, item, container_serial);
    }

    debug_assert_eq!(buf.len() - start, length as usize);
    Ok(())
}

/// The 19-byte item entry shared by both container packets
#[inline]
fn write_container_entry(buf: &mut BytesMut, item: &ItemSnapshot, container: Serial) {
    write_serial(buf, item.serial);
    write_graphic(buf, item.graphic);
    buf.put_u8(0);
    buf.put_u16(item.amount);
    write_xy(buf, item.location);
    write_serial(buf, container);
    write_hue(buf, item.hue);
}
