//! TPM_ST structure tags carried in the first two header bytes.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

#[repr(u16)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
pub enum StructureTag {
    Null = 0x8000,
    /// No sessions attached. Also used for every error response to a
    /// command sent with `NoSessions` or `Sessions`.
    NoSessions = 0x8001,
    /// One or more sessions attached, the authorization area is present.
    Sessions = 0x8002,
    AttestClock = 0x8014,
    AttestCommandAudit = 0x8015,
    AttestSessionAudit = 0x8016,
    AttestCertify = 0x8017,
    AttestQuote = 0x8018,
    AttestTick = 0x8019,
    AttestTickstamp = 0x801A,
    AttestTransport = 0x801B,
    AttestCreation = 0x801C,
    AttestNv = 0x801D,
    Creation = 0x8021,
    Verified = 0x8022,
    Auth = 0x8023,
    Hashcheck = 0x8024,
    FuManifest = 0x8029,
}

impl StructureTag {
    pub fn from_u16(val: u16) -> Option<StructureTag> {
        FromPrimitive::from_u16(val)
    }

    pub fn to_u16(self) -> u16 {
        self as u16
    }

    pub fn has_sessions(self) -> bool {
        self == StructureTag::Sessions
    }
}

impl From<StructureTag> for u16 {
    fn from(tag: StructureTag) -> u16 {
        tag.to_u16()
    }
}
