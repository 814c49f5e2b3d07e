//! EXIF format constants
//!
//! Named values for the fixed parts of the EXIF/TIFF layout, the field type
//! codes and the tags decoded from each directory.

/// EXIF block and TIFF header constants
pub mod header {
    /// Signature that opens every EXIF block
    pub const EXIF_SIGNATURE: [u8; 6] = *b"Exif\0\0";

    /// Offset of the TIFF header inside the EXIF block
    pub const TIFF_BASE: usize = 6;

    /// Signature plus the 8-byte TIFF header
    pub const MIN_EXIF_LENGTH: usize = TIFF_BASE + 8;

    /// TIFF magic number (42)
    pub const TIFF_MAGIC: u16 = 0x002A;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];
}

/// Directory layout sizes
pub mod layout {
    /// Size of the entry count that opens a directory
    pub const ENTRY_COUNT_SIZE: usize = 2;

    /// Size of one directory entry
    pub const ENTRY_SIZE: usize = 12;

    /// Size of the next-directory pointer that closes a directory
    pub const NEXT_IFD_SIZE: usize = 4;

    /// Size of the inline value slot of an entry
    pub const INLINE_VALUE_SIZE: usize = 4;

    /// Size of one rational value
    pub const RATIONAL_SIZE: usize = 8;
}

/// TIFF 6.0 field types
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
}

/// Tags of the primary image directory (IFD0)
pub mod primary_tags {
    pub const BITS_PER_SAMPLE: u16 = 0x0102;
    pub const IMAGE_DESCRIPTION: u16 = 0x010E;
    pub const MAKE: u16 = 0x010F;
    pub const MODEL: u16 = 0x0110;
    pub const ORIENTATION: u16 = 0x0112;
    pub const SOFTWARE: u16 = 0x0131;
    pub const DATE_TIME: u16 = 0x0132;
    pub const COPYRIGHT: u16 = 0x8298;
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    pub const GPS_IFD_POINTER: u16 = 0x8825;
}

/// Tags of the EXIF sub-directory
pub mod exif_tags {
    pub const EXPOSURE_TIME: u16 = 0x829A;
    pub const F_NUMBER: u16 = 0x829D;
    pub const EXPOSURE_PROGRAM: u16 = 0x8822;
    pub const ISO_SPEED_RATINGS: u16 = 0x8827;
    pub const DATE_TIME_ORIGINAL: u16 = 0x9003;
    pub const DATE_TIME_DIGITIZED: u16 = 0x9004;
    pub const SHUTTER_SPEED_VALUE: u16 = 0x9201;
    pub const APERTURE_VALUE: u16 = 0x9202;
    pub const EXPOSURE_BIAS_VALUE: u16 = 0x9204;
    pub const MAX_APERTURE_VALUE: u16 = 0x9205;
    pub const SUBJECT_DISTANCE: u16 = 0x9206;
    pub const METERING_MODE: u16 = 0x9207;
    pub const FLASH: u16 = 0x9209;
    pub const FOCAL_LENGTH: u16 = 0x920A;
    pub const SUB_SEC_TIME_ORIGINAL: u16 = 0x9291;
    pub const IMAGE_WIDTH: u16 = 0xA002;
    pub const IMAGE_HEIGHT: u16 = 0xA003;
    pub const FOCAL_LENGTH_IN_35MM: u16 = 0xA405;
}

/// Tags of the GPS sub-directory
pub mod gps_tags {
    pub const LATITUDE_REF: u16 = 1;
    pub const LATITUDE: u16 = 2;
    pub const LONGITUDE_REF: u16 = 3;
    pub const LONGITUDE: u16 = 4;
    pub const ALTITUDE_REF: u16 = 5;
    pub const ALTITUDE: u16 = 6;
}
