//! JPEG container scanner
//!
//! Walks the leading marker segments of a JPEG stream to find the APP1
//! segment and returns its raw bytes. An optional APP0 (JFIF) segment is
//! skipped; any other layout means the stream carries no EXIF block we can
//! find. The payload is not validated here; the `Exif\0\0` check belongs to
//! the decoder.

use std::io::{Cursor, ErrorKind, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};
use log::debug;

use crate::io::seekable::SeekableReader;
use crate::jpeg::markers;

/// Extracts the raw APP1 payload from a JPEG stream
///
/// Returns an empty vector when the stream has no EXIF block, is not a
/// JPEG, or ends early. This is the normal outcome for many files and is
/// not an error.
pub fn extract_exif(reader: &mut dyn SeekableReader) -> Vec<u8> {
    match scan(reader) {
        Ok(Some(payload)) => {
            debug!("Found APP1 payload of {} bytes", payload.len());
            payload
        }
        Ok(None) => Vec::new(),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            debug!("JPEG stream ended before an APP1 segment");
            Vec::new()
        }
        Err(e) => {
            debug!("Error scanning JPEG stream: {}", e);
            Vec::new()
        }
    }
}

/// Extracts the raw APP1 payload from an in-memory JPEG
pub fn extract_exif_from_bytes(bytes: &[u8]) -> Vec<u8> {
    extract_exif(&mut Cursor::new(bytes))
}

/// Single pass over the leading segments; stops at the first mismatch
fn scan(reader: &mut dyn SeekableReader) -> std::io::Result<Option<Vec<u8>>> {
    let mut soi = [0u8; 2];
    reader.read_exact(&mut soi)?;
    if soi != markers::SOI {
        debug!("Missing SOI marker: {:02x?}", soi);
        return Ok(None);
    }

    if reader.read_u8()? != markers::MARKER_PREFIX {
        debug!("No marker follows SOI");
        return Ok(None);
    }
    let mut marker = reader.read_u8()?;

    if marker == markers::APP0 {
        let length = reader.read_u16::<BigEndian>()?;
        if length < 2 {
            debug!("APP0 length {} is too small", length);
            return Ok(None);
        }
        // APP0 length counts its own two bytes
        reader.seek(SeekFrom::Current(i64::from(length - 2)))?;
        debug!("Skipped APP0 segment of {} bytes", length);

        if reader.read_u8()? != markers::MARKER_PREFIX {
            debug!("No marker follows APP0");
            return Ok(None);
        }
        marker = reader.read_u8()?;
    }

    if marker != markers::APP1 {
        debug!("Marker {:#04x} is not APP1", marker);
        return Ok(None);
    }

    // Read exactly the declared length, without discounting the length field
    let length = reader.read_u16::<BigEndian>()? as usize;
    let mut payload = vec![0u8; length];
    reader.read_exact(&mut payload)?;

    Ok(Some(payload))
}
