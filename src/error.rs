use core::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The buffer cannot hold a complete header.
    TruncatedBuffer { len: usize, needed: usize },
    /// The header's size field is smaller than the header itself, so there
    /// is no header-exclusive size to report.
    SizeUnderflow { size: u32 },
}

pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedBuffer { len, needed } => {
                write!(f, "buffer length {} < header size {}", len, needed)
            }
            Error::SizeUnderflow { size } => write!(
                f,
                "header size field {:#x} is smaller than the {} byte header",
                size,
                crate::HEADER_SIZE
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
