//! Pure big-endian decoding helpers.
//!
//! NBT numbers are always big-endian regardless of host platform, so every
//! multi-byte read goes through here rather than through a host-endian
//! cast.

use byteorder::{BigEndian, ByteOrder};

pub(crate) fn read_u16(bytes: &[u8]) -> u16 {
    BigEndian::read_u16(bytes)
}

pub(crate) fn read_i16(bytes: &[u8]) -> i16 {
    BigEndian::read_i16(bytes)
}

pub(crate) fn read_u32(bytes: &[u8]) -> u32 {
    BigEndian::read_u32(bytes)
}

pub(crate) fn read_i32(bytes: &[u8]) -> i32 {
    BigEndian::read_i32(bytes)
}

pub(crate) fn read_i64(bytes: &[u8]) -> i64 {
    BigEndian::read_i64(bytes)
}

pub(crate) fn read_u64(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

pub(crate) fn read_f32(bytes: &[u8]) -> f32 {
    BigEndian::read_f32(bytes)
}

pub(crate) fn read_f64(bytes: &[u8]) -> f64 {
    BigEndian::read_f64(bytes)
}
