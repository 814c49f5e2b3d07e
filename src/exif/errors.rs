//! Custom error types for EXIF decoding

use std::fmt;
use std::io;

/// EXIF-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Buffer too short to hold the signature and TIFF header
    BufferTooShort { length: usize },
    /// First six bytes are not `Exif\0\0`
    InvalidSignature,
    /// Alignment marker is neither "II" nor "MM"
    InvalidByteOrder(u16),
    /// TIFF magic number is not 0x002A
    InvalidMagic(u16),
    /// A directory's declared entry count would read past the end of the buffer
    DirectoryTruncated {
        directory: &'static str,
        offset: usize,
        entries: usize,
        length: usize,
    },
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::BufferTooShort { length } => {
                write!(f, "EXIF block too short: {} bytes", length)
            }
            ExifError::InvalidSignature => write!(f, "Missing Exif\\0\\0 signature"),
            ExifError::InvalidByteOrder(v) => write!(f, "Invalid byte order marker: {:#06x}", v),
            ExifError::InvalidMagic(v) => write!(f, "Invalid TIFF magic number: {:#06x}", v),
            ExifError::DirectoryTruncated { directory, offset, entries, length } => write!(
                f,
                "{} directory at offset {} with {} entries exceeds buffer length {}",
                directory, offset, entries, length
            ),
            ExifError::GenericError(msg) => write!(f, "EXIF error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for EXIF operations
pub type ExifResult<T> = Result<T, ExifError>;
