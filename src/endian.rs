//! Host byte order detection and big-endian (wire order) conversions.
//!
//! TPM2 puts every multi-byte field on the wire most significant byte first.
//! The `be*toh`/`htobe*` pair works on integers whose in-memory bytes hold a
//! wire-order value, the `read_be_*`/`write_be_*` pair works on byte arrays and
//! never depends on the host at all.

use byteorder::{BigEndian, ByteOrder};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HostEndian {
    Little,
    Big,
}

pub const fn host_endian() -> HostEndian {
    if cfg!(target_endian = "big") {
        HostEndian::Big
    } else {
        HostEndian::Little
    }
}

pub const fn is_big_endian() -> bool {
    matches!(host_endian(), HostEndian::Big)
}

/// Big-endian 16-bit value to host order. A no-op on big-endian hosts.
#[inline]
pub const fn be16toh(value: u16) -> u16 {
    u16::from_be(value)
}

/// Big-endian 32-bit value to host order. A no-op on big-endian hosts.
#[inline]
pub const fn be32toh(value: u32) -> u32 {
    u32::from_be(value)
}

#[inline]
pub const fn htobe16(value: u16) -> u16 {
    value.to_be()
}

#[inline]
pub const fn htobe32(value: u32) -> u32 {
    value.to_be()
}

#[inline]
pub fn read_be_u16(bytes: &[u8; 2]) -> u16 {
    BigEndian::read_u16(bytes)
}

#[inline]
pub fn read_be_u32(bytes: &[u8; 4]) -> u32 {
    BigEndian::read_u32(bytes)
}

#[inline]
pub fn write_be_u16(bytes: &mut [u8; 2], value: u16) {
    BigEndian::write_u16(bytes, value)
}

#[inline]
pub fn write_be_u32(bytes: &mut [u8; 4], value: u32) {
    BigEndian::write_u32(bytes, value)
}
