//! Borrowed views over the 10 byte header that starts every TPM2 command and
//! response.
//!
//! ```text
//! offset  len  field
//!      0    2  tag
//!      2    4  size (whole message, header included)
//!      6    4  command code / response code
//!     10    *  payload
//! ```
//!
//! A view keeps the header bytes exactly as they arrived and decodes a field
//! only when it is asked for, so nothing here depends on host byte order.

use core::convert::TryInto;

use log::{debug, trace};

use crate::code::{CommandCode, ResponseCode};
use crate::encode::encode_header;
use crate::endian::{read_be_u16, read_be_u32};
use crate::error::{Error, Result};
use crate::tag::StructureTag;

pub const HEADER_SIZE: usize = 10;
pub const COMMAND_HEADER_SIZE: usize = HEADER_SIZE;
pub const RESPONSE_HEADER_SIZE: usize = HEADER_SIZE;

pub const TAG_OFFSET: usize = 0;
pub const SIZE_OFFSET: usize = 2;
pub const CODE_OFFSET: usize = 6;

/// Accessors shared by command and response headers.
pub trait Tpm2Header<'a> {
    /// The header region, byte for byte as it appears in the source buffer.
    fn bytes(&self) -> &'a [u8; HEADER_SIZE];

    /// Everything after the header, up to the end of the source buffer. This
    /// is not cut down to what the size field announces.
    fn data(&self) -> &'a [u8];

    fn tag(&self) -> u16 {
        let b = self.bytes();
        read_be_u16(&[b[TAG_OFFSET], b[TAG_OFFSET + 1]])
    }

    fn structure_tag(&self) -> Option<StructureTag> {
        StructureTag::from_u16(self.tag())
    }

    /// Message length with (`include_header`) or without the header.
    fn size(&self, include_header: bool) -> Result<u32> {
        if include_header {
            Ok(self.total_size())
        } else {
            self.payload_size()
        }
    }

    fn total_size(&self) -> u32 {
        let b = self.bytes();
        read_be_u32(&[
            b[SIZE_OFFSET],
            b[SIZE_OFFSET + 1],
            b[SIZE_OFFSET + 2],
            b[SIZE_OFFSET + 3],
        ])
    }

    fn payload_size(&self) -> Result<u32> {
        let size = self.total_size();
        size.checked_sub(HEADER_SIZE as u32).ok_or_else(|| {
            debug!("header size {:#x} is smaller than the header", size);
            Error::SizeUnderflow { size }
        })
    }

    /// Command code for a command, response code for a response.
    fn code(&self) -> u32 {
        let b = self.bytes();
        read_be_u32(&[
            b[CODE_OFFSET],
            b[CODE_OFFSET + 1],
            b[CODE_OFFSET + 2],
            b[CODE_OFFSET + 3],
        ])
    }

    /// The three fields read in host byte order instead of wire order. Only
    /// matches the wire values on big-endian hosts; use the accessors above
    /// for anything other than diagnostics.
    fn raw_fields(&self) -> (u16, u32, u32) {
        let b = self.bytes();
        (
            u16::from_ne_bytes([b[0], b[1]]),
            u32::from_ne_bytes([b[2], b[3], b[4], b[5]]),
            u32::from_ne_bytes([b[6], b[7], b[8], b[9]]),
        )
    }
}

fn split_header(buffer: &[u8]) -> Result<(&[u8; HEADER_SIZE], &[u8])> {
    let truncated = Error::TruncatedBuffer {
        len: buffer.len(),
        needed: HEADER_SIZE,
    };
    if buffer.len() < HEADER_SIZE {
        debug!(
            "refusing to decode header from {} byte buffer",
            buffer.len()
        );
        return Err(truncated);
    }
    let (head, data) = buffer.split_at(HEADER_SIZE);
    let head = head.try_into().map_err(|_| truncated)?;
    Ok((head, data))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandHeader<'a> {
    bytes: &'a [u8; HEADER_SIZE],
    data: &'a [u8],
}

impl<'a> CommandHeader<'a> {
    pub fn from_bytes(buffer: &'a [u8]) -> Result<Self> {
        let (bytes, data) = split_header(buffer)?;
        let header = CommandHeader { bytes, data };
        trace!(
            "command header: tag={:#06x} size={:#x} cc={:#x} data={}B",
            header.tag(),
            header.total_size(),
            header.code(),
            data.len()
        );
        Ok(header)
    }

    pub fn command_code(&self) -> Option<CommandCode> {
        CommandCode::from_u32(self.code())
    }

    pub fn encode(tag: u16, size: u32, command_code: u32) -> [u8; COMMAND_HEADER_SIZE] {
        encode_header(tag, size, command_code)
    }
}

impl<'a> Tpm2Header<'a> for CommandHeader<'a> {
    fn bytes(&self) -> &'a [u8; HEADER_SIZE] {
        self.bytes
    }

    fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResponseHeader<'a> {
    bytes: &'a [u8; HEADER_SIZE],
    data: &'a [u8],
}

impl<'a> ResponseHeader<'a> {
    pub fn from_bytes(buffer: &'a [u8]) -> Result<Self> {
        let (bytes, data) = split_header(buffer)?;
        let header = ResponseHeader { bytes, data };
        trace!(
            "response header: tag={:#06x} size={:#x} rc={:#x} data={}B",
            header.tag(),
            header.total_size(),
            header.code(),
            data.len()
        );
        Ok(header)
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode(self.code())
    }

    pub fn is_success(&self) -> bool {
        self.response_code().is_success()
    }

    pub fn encode(tag: u16, size: u32, response_code: u32) -> [u8; RESPONSE_HEADER_SIZE] {
        encode_header(tag, size, response_code)
    }
}

impl<'a> Tpm2Header<'a> for ResponseHeader<'a> {
    fn bytes(&self) -> &'a [u8; HEADER_SIZE] {
        self.bytes
    }

    fn data(&self) -> &'a [u8] {
        self.data
    }
}

pub fn command_header_from_bytes(buffer: &[u8]) -> Result<CommandHeader<'_>> {
    CommandHeader::from_bytes(buffer)
}

pub fn response_header_from_bytes(buffer: &[u8]) -> Result<ResponseHeader<'_>> {
    ResponseHeader::from_bytes(buffer)
}
