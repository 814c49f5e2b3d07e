//! JPEG container handling
//!
//! Locates the EXIF payload inside a JPEG byte stream. Pixel data is never
//! read.

pub mod scanner;
#[cfg(test)]
mod tests;

pub use scanner::{extract_exif, extract_exif_from_bytes};

/// JPEG marker bytes
pub mod markers {
    /// Byte that introduces every marker
    pub const MARKER_PREFIX: u8 = 0xFF;

    /// Start Of Image marker
    pub const SOI: [u8; 2] = [0xFF, 0xD8];

    /// Application segment 0 (JFIF) marker type
    pub const APP0: u8 = 0xE0;

    /// Application segment 1 (EXIF) marker type
    pub const APP1: u8 = 0xE1;
}
