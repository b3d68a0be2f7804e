//! Writing headers back out in wire order.

use log::debug;

use crate::endian::{write_be_u16, write_be_u32};
use crate::error::{Error, Result};
use crate::header::HEADER_SIZE;

pub fn encode_header(tag: u16, size: u32, code: u32) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];

    let mut tag_bytes = [0u8; 2];
    write_be_u16(&mut tag_bytes, tag);
    bytes[0..2].copy_from_slice(&tag_bytes);

    let mut size_bytes = [0u8; 4];
    write_be_u32(&mut size_bytes, size);
    bytes[2..6].copy_from_slice(&size_bytes);

    let mut code_bytes = [0u8; 4];
    write_be_u32(&mut code_bytes, code);
    bytes[6..HEADER_SIZE].copy_from_slice(&code_bytes);

    bytes
}

/// Write a header into the front of `buf`, leaving the rest untouched.
pub fn write_header(buf: &mut [u8], tag: u16, size: u32, code: u32) -> Result<()> {
    if buf.len() < HEADER_SIZE {
        debug!("no room for a header in {} byte buffer", buf.len());
        return Err(Error::TruncatedBuffer {
            len: buf.len(),
            needed: HEADER_SIZE,
        });
    }
    buf[..HEADER_SIZE].copy_from_slice(&encode_header(tag, size, code));
    Ok(())
}
