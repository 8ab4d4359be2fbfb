//! Binary codecs for the legacy wire format
//!
//! Everything is fixed-width and big-endian (network byte order). The only
//! signed field in the object packets is the elevation byte.

use bytes::{Buf, BufMut, BytesMut};
use shard_core::{Graphic, Hue, Point3D, Result, Serial, ShardError};

use crate::packets::PacketTypeOut;

/// Size of the packet header: id, length word, padding byte
pub const HEADER_LEN: usize = 4;

/// Parsed packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub packet_type: PacketTypeOut,

    /// Total packet length, header included
    pub length: u16,
}

/// Write a packet header
///
/// # Format
/// ```text
/// {BYTE id}{WORD length}{BYTE 0}
/// ```
#[inline]
pub fn write_header(buf: &mut BytesMut, packet_type: PacketTypeOut, length: u16) {
    buf.reserve(length as usize);
    buf.put_u8(packet_type.as_u8());
    buf.put_u16(length);
    buf.put_u8(0);
}

/// Read a packet header
///
/// Only checks that the id is known and the buffer holds the whole packet;
/// the body is left in `buf`.
pub fn read_header(buf: &mut BytesMut) -> Result<PacketHeader> {
    if buf.remaining() < HEADER_LEN {
        return Err(ShardError::InvalidData("Not enough bytes for packet header".into()));
    }

    let id = buf[0];
    let packet_type = PacketTypeOut::from_u8(id)
        .ok_or_else(|| ShardError::Protocol(format!("Unknown packet type: 0x{:02X}", id)))?;
    let length = u16::from_be_bytes([buf[1], buf[2]]);

    if let Some(expected) = packet_type.fixed_length() {
        if length != expected {
            return Err(ShardError::Protocol(format!(
                "{:?} declares length {} but must be {}",
                packet_type, length, expected
            )));
        }
    }
    if buf.remaining() < length as usize {
        return Err(ShardError::InvalidData(format!(
            "Truncated {:?}: have {} of {} bytes",
            packet_type,
            buf.remaining(),
            length
        )));
    }

    buf.advance(HEADER_LEN);
    tracing::trace!("Read {:?} header, {} bytes", packet_type, length);
    Ok(PacketHeader { packet_type, length })
}

#[inline]
pub fn write_serial(buf: &mut BytesMut, serial: Serial) {
    buf.put_u32(serial.get());
}

#[inline]
pub fn write_graphic(buf: &mut BytesMut, graphic: Graphic) {
    buf.put_u16(graphic.get());
}

#[inline]
pub fn write_hue(buf: &mut BytesMut, hue: Hue) {
    buf.put_u16(hue.get());
}

/// Write the x and y words of a location
///
/// Coordinates outside the 16-bit range are truncated; the caller owns
/// the range check.
#[inline]
pub fn write_xy(buf: &mut BytesMut, location: Point3D) {
    buf.put_u16(location.x as u16);
    buf.put_u16(location.y as u16);
}

/// Write an elevation as a signed byte
#[inline]
pub fn write_z(buf: &mut BytesMut, z: i32) {
    buf.put_i8(z as i8);
}
