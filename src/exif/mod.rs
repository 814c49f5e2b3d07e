//! EXIF block decoding module
//!
//! This module decodes the TIFF-structured EXIF payload of a JPEG APP1
//! segment into a `MetadataRecord`.

pub mod errors;
pub mod constants;
pub mod entry;
pub mod record;
pub mod dispatch;
pub mod decoder;
pub mod tag_names;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{ExifError, ExifResult};
pub use entry::DirectoryEntry;
pub use record::{Coordinate, GeoLocation, MetadataRecord};
pub use dispatch::IfdKind;
pub use decoder::{decode, ExifDecoder};
