//! Main interface to the ExifKit library
//!
//! Chains the JPEG scanner and the EXIF decoder.

use log::{debug, info};

use crate::exif::decoder;
use crate::exif::errors::ExifResult;
use crate::exif::record::MetadataRecord;
use crate::io::seekable::SeekableReader;
use crate::jpeg::scanner;

/// Reads EXIF metadata from an in-memory JPEG
///
/// # Returns
/// * `Ok(None)` if the JPEG carries no EXIF block
/// * `Ok(Some(record))` if the block decoded
/// * `Err` if a block was found but is malformed
pub fn read_metadata(bytes: &[u8]) -> ExifResult<Option<MetadataRecord>> {
    decode_payload(scanner::extract_exif_from_bytes(bytes))
}

/// Reads EXIF metadata from a JPEG stream
///
/// Only the leading segments up to and including APP1 are read.
pub fn read_metadata_from(reader: &mut dyn SeekableReader) -> ExifResult<Option<MetadataRecord>> {
    decode_payload(scanner::extract_exif(reader))
}

fn decode_payload(payload: Vec<u8>) -> ExifResult<Option<MetadataRecord>> {
    if payload.is_empty() {
        debug!("No EXIF payload found");
        return Ok(None);
    }

    let record = decoder::decode(&payload)?;
    info!("Decoded EXIF metadata: make={:?}, model={:?}", record.make, record.model);
    Ok(Some(record))
}
