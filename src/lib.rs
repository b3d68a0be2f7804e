#![no_std]

//! Decoding of the fixed header in front of every TPM2 command and response.
//!
//! ```
//! use tpm2_header::{command_header_from_bytes, Tpm2Header};
//!
//! let bytes = [0x80, 0x01, 0x00, 0x00, 0x00, 0x0c, 0x00, 0x00, 0x01, 0x44, 0x00, 0x00];
//! let header = command_header_from_bytes(&bytes).unwrap();
//! assert_eq!(header.tag(), 0x8001);
//! assert_eq!(header.size(false), Ok(2));
//! assert_eq!(header.code(), 0x144);
//! assert_eq!(header.data(), &[0x00, 0x00]);
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod code;
pub mod encode;
pub mod endian;
pub mod error;
pub mod header;
pub mod tag;

pub use code::{CommandCode, ResponseCode};
pub use encode::{encode_header, write_header};
pub use endian::{host_endian, is_big_endian, HostEndian};
pub use error::{Error, Result};
pub use header::{
    command_header_from_bytes, response_header_from_bytes, CommandHeader, ResponseHeader,
    Tpm2Header, COMMAND_HEADER_SIZE, HEADER_SIZE, RESPONSE_HEADER_SIZE,
};
pub use tag::StructureTag;
