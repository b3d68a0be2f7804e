//! Command codes (TPM2_CC) and response codes (TSS2_RC) carried in the last
//! four header bytes.

use core::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

#[allow(clippy::upper_case_acronyms)]
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, FromPrimitive, ToPrimitive)]
pub enum CommandCode {
    NVUndefineSpaceSpecial = 0x11f,
    EvictControl = 0x120,
    HierarchyControl = 0x121,
    NVUndefineSpace = 0x122,
    ChangeEPS = 0x124,
    ChangePPS = 0x125,
    Clear = 0x126,
    ClearControl = 0x127,
    ClockSet = 0x128,
    HierarchyChangeAuth = 0x129,
    NVDefineSpace = 0x12a,
    PCRAllocate = 0x12b,
    PCRSetAuthPolicy = 0x12c,
    PPCommands = 0x12d,
    SetPrimaryPolicy = 0x12e,
    FieldUpgradeStart = 0x12f,
    ClockRateAdjust = 0x130,
    CreatePrimary = 0x131,
    NVGlobalWriteLock = 0x132,
    GetCommandAuditDigest = 0x133,
    NVIncrement = 0x134,
    NVSetBits = 0x135,
    NVExtend = 0x136,
    NVWrite = 0x137,
    NVWriteLock = 0x138,
    DictionaryAttackLockReset = 0x139,
    DictionaryAttackParameters = 0x13a,
    NVChangeAuth = 0x13b,
    PCREvent = 0x13c,
    PCRReset = 0x13d,
    SequenceComplete = 0x13e,
    SetAlgorithmSet = 0x13f,
    SetCommandCodeAuditStatus = 0x140,
    FieldUpgradeData = 0x141,
    IncrementalSelfTest = 0x142,
    SelfTest = 0x143,
    Startup = 0x144,
    Shutdown = 0x145,
    StirRandom = 0x146,
    ActivateCredential = 0x147,
    Certify = 0x148,
    PolicyNV = 0x149,
    CertifyCreation = 0x14a,
    Duplicate = 0x14b,
    GetTime = 0x14c,
    GetSessionAuditDigest = 0x14d,
    NVRead = 0x14e,
    NVReadLock = 0x14f,
    ObjectChangeAuth = 0x150,
    PolicySecret = 0x151,
    Rewrap = 0x152,
    Create = 0x153,
    ECDHZGen = 0x154,
    HMAC = 0x155,
    Import = 0x156,
    Load = 0x157,
    Quote = 0x158,
    RSADecrypt = 0x159,
    HMACStart = 0x15b,
    SequenceUpdate = 0x15c,
    Sign = 0x15d,
    Unseal = 0x15e,
    PolicySigned = 0x160,
    ContextLoad = 0x161,
    ContextSave = 0x162,
    ECDHKeyGen = 0x163,
    EncryptDecrypt = 0x164,
    FlushContext = 0x165,
    LoadExternal = 0x167,
    MakeCredential = 0x168,
    NVReadPublic = 0x169,
    PolicyAuthorize = 0x16a,
    PolicyAuthValue = 0x16b,
    PolicyCommandCode = 0x16c,
    PolicyCounterTimer = 0x16d,
    PolicyCpHash = 0x16e,
    PolicyLocality = 0x16f,
    PolicyNameHash = 0x170,
    PolicyOR = 0x171,
    PolicyTicket = 0x172,
    ReadPublic = 0x173,
    RSAEncrypt = 0x174,
    StartAuthSession = 0x176,
    VerifySignature = 0x177,
    ECCParameters = 0x178,
    FirmwareRead = 0x179,
    GetCapability = 0x17a,
    GetRandom = 0x17b,
    GetTestResult = 0x17c,
    Hash = 0x17d,
    PCRRead = 0x17e,
    PolicyPCR = 0x17f,
    PolicyRestart = 0x180,
    ReadClock = 0x181,
    PCRExtend = 0x182,
    PCRSetAuthValue = 0x183,
    NVCertify = 0x184,
    EventSequenceComplete = 0x185,
    HashSequenceStart = 0x186,
    PolicyPhysicalPresence = 0x187,
    PolicyDuplicationSelect = 0x188,
    PolicyGetDigest = 0x189,
    TestParms = 0x18a,
    Commit = 0x18b,
    PolicyPassword = 0x18c,
    ZGen2Phase = 0x18d,
    ECEphemeral = 0x18e,
    PolicyNvWritten = 0x18f,
    PolicyTemplate = 0x190,
    CreateLoaded = 0x191,
    PolicyAuthorizeNV = 0x192,
    EncryptDecrypt2 = 0x193,
    ACGetCapability = 0x194,
    ACSend = 0x195,
    PolicyACSendSelect = 0x196,
    CertifyX509 = 0x197,
    ACTSetTimeout = 0x198,}

impl CommandCode {
    pub fn from_u32(val: u32) -> Option<CommandCode> {
        FromPrimitive::from_u32(val)
    }
}

impl From<CommandCode> for u32 {
    fn from(cc: CommandCode) -> u32 {
        cc as u32
    }
}

const RC_FMT1: u32 = 0x080;
const RC_WARN: u32 = 0x800;
const LAYER_SHIFT: u32 = 16;
const LAYER_MASK: u32 = 0xff << LAYER_SHIFT;

/// Status returned in a response header. Zero is success, everything else is
/// an error from the TPM itself (layer 0) or from a software layer stacked
/// on top of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ResponseCode(pub u32);

impl ResponseCode {
    pub const SUCCESS: ResponseCode = ResponseCode(0);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Originating layer. 0 is the TPM, other values are assigned to the
    /// software stack components that can report on its behalf.
    pub fn layer(self) -> u8 {
        ((self.0 & LAYER_MASK) >> LAYER_SHIFT) as u8
    }

    /// The code with the layer bits cleared.
    pub fn base(self) -> u32 {
        self.0 & !LAYER_MASK
    }

    /// Format-one codes are tied to a specific handle, session or parameter.
    pub fn is_format_one(self) -> bool {
        self.base() & RC_FMT1 != 0
    }

    pub fn is_warning(self) -> bool {
        !self.is_format_one() && self.base() & RC_WARN != 0
    }

    pub fn error_number(self) -> u32 {
        if self.is_format_one() {
            self.base() & 0x3f
        } else {
            self.base() & 0x7f
        }
    }
}

impl From<u32> for ResponseCode {
    fn from(rc: u32) -> Self {
        ResponseCode(rc)
    }
}

impl From<ResponseCode> for u32 {
    fn from(rc: ResponseCode) -> u32 {
        rc.0
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn command_codes_decode() {
        assert_eq!(CommandCode::from_u32(0x17a), Some(CommandCode::GetCapability));
        assert_eq!(CommandCode::from_u32(0x144), Some(CommandCode::Startup));
        assert_eq!(CommandCode::from_u32(0x123), None);
        assert_eq!(CommandCode::from_u32(0x7a01_0000), None);
        assert_eq!(u32::from(CommandCode::ACTSetTimeout), 0x198);
    }

    #[test]
    fn success_code() {
        let rc = ResponseCode::SUCCESS;
        assert!(rc.is_success());
        assert_eq!(rc.layer(), 0);
        assert!(!rc.is_format_one());
        assert_eq!(rc.to_string(), "0x00000000");
    }

    #[test]
    fn format_zero_and_one() {
        // TPM_RC_INITIALIZE
        let rc = ResponseCode(0x100);
        assert!(!rc.is_success());
        assert!(!rc.is_format_one());
        assert_eq!(rc.error_number(), 0);

        // TPM_RC_RETRY
        assert!(ResponseCode(0x922).is_warning());

        // TPM_RC_VALUE on parameter 1
        let rc = ResponseCode(0x1c4);
        assert!(rc.is_format_one());
        assert!(!rc.is_warning());
        assert_eq!(rc.error_number(), 0x04);
    }

    #[test]
    fn layer_is_split_out() {
        let rc = ResponseCode(0x000a_0005);
        assert_eq!(rc.layer(), 0x0a);
        assert_eq!(rc.base(), 0x05);
        assert_eq!(rc.error_number(), 0x05);
    }
}
