pub mod io;
pub mod jpeg;
pub mod exif;
pub mod utils;
pub mod api;

pub use crate::api::{read_metadata, read_metadata_from};

pub use exif::{decode, ExifError, ExifResult, GeoLocation, Coordinate, MetadataRecord};
pub use io::byte_order::ByteOrder;
pub use jpeg::{extract_exif, extract_exif_from_bytes};
