//! Byte order handling for EXIF data
//!
//! The TIFF header embedded in an EXIF block declares the byte order used by
//! every multi-byte value that follows it. This module turns that marker into
//! a `ByteOrder` and provides the endian-aware primitive readers.

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};

use crate::exif::constants::header;
use crate::exif::errors::{ExifError, ExifResult};

/// Denominators below this are treated as zero by `read_rational`
pub const RATIONAL_EPSILON: f64 = 1e-20;

/// Represents the byte order of an EXIF block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    #[default]
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the two alignment bytes of the TIFF header
    pub fn detect(marker: &[u8; 2]) -> ExifResult<Self> {
        match *marker {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(ExifError::InvalidByteOrder(u16::from_be_bytes(*marker))),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II, Intel)",
            ByteOrder::BigEndian => "Big Endian (MM, Motorola)",
        }
    }

    /// Read a u16 value
    pub fn read_u16(&self, buf: &[u8; 2]) -> u16 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_u16(buf),
            ByteOrder::BigEndian => BigEndian::read_u16(buf),
        }
    }

    /// Read a u32 value
    pub fn read_u32(&self, buf: &[u8; 4]) -> u32 {
        match self {
            ByteOrder::LittleEndian => LittleEndian::read_u32(buf),
            ByteOrder::BigEndian => BigEndian::read_u32(buf),
        }
    }

    /// Read an unsigned rational (two u32 values as numerator/denominator)
    ///
    /// Returns `0.0` when the denominator is (near) zero.
    pub fn read_rational(&self, buf: &[u8; 8]) -> f64 {
        let (num, den) = buf.split_at(4);
        let numerator = match self {
            ByteOrder::LittleEndian => LittleEndian::read_u32(num),
            ByteOrder::BigEndian => BigEndian::read_u32(num),
        } as f64;
        let denominator = match self {
            ByteOrder::LittleEndian => LittleEndian::read_u32(den),
            ByteOrder::BigEndian => BigEndian::read_u32(den),
        } as f64;

        if denominator > RATIONAL_EPSILON {
            numerator / denominator
        } else {
            0.0
        }
    }
}
