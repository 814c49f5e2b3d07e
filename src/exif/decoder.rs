//! EXIF block decoder
//!
//! Decodes the payload of an APP1 segment:
//! 1. Validate the `Exif\0\0` signature and the TIFF header that follows it
//! 2. Walk the primary directory (IFD0), noting the EXIF and GPS pointers
//! 3. Walk the EXIF sub-directory, if the pointer leaves room for one
//! 4. Walk the GPS sub-directory, likewise, then apply hemisphere signs
//!
//! All three walks share one bounds-checked routine. Any structural failure
//! aborts the decode; no partial record is returned.

use log::{debug, info, trace};

use crate::exif::constants::{header, layout};
use crate::exif::dispatch::{self, DecodeState, EntryContext, IfdKind};
use crate::exif::entry::DirectoryEntry;
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::record::MetadataRecord;
use crate::io::byte_order::ByteOrder;
use crate::utils::slice_utils::array_at;

/// Decodes an EXIF block into a metadata record
///
/// # Arguments
/// * `data` - APP1 payload, starting with `Exif\0\0`
///
/// # Returns
/// The decoded record, or an error if the block is malformed
pub fn decode(data: &[u8]) -> ExifResult<MetadataRecord> {
    let (decoder, ifd0_offset) = ExifDecoder::new(data)?;
    decoder.decode_directories(ifd0_offset)
}

/// Decoder over one EXIF block with a known byte order
#[derive(Debug, Clone, Copy)]
pub struct ExifDecoder<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> ExifDecoder<'a> {
    /// Validates the signature and TIFF header
    ///
    /// # Returns
    /// The decoder and the absolute offset of the primary directory
    pub fn new(data: &'a [u8]) -> ExifResult<(Self, usize)> {
        if data.len() < header::MIN_EXIF_LENGTH {
            return Err(ExifError::BufferTooShort { length: data.len() });
        }

        if data[..header::TIFF_BASE] != header::EXIF_SIGNATURE {
            return Err(ExifError::InvalidSignature);
        }

        let base = header::TIFF_BASE;
        let byte_order = ByteOrder::detect(&[data[base], data[base + 1]])?;
        debug!("Detected byte order: {}", byte_order.name());

        let magic = byte_order.read_u16(&[data[base + 2], data[base + 3]]);
        if magic != header::TIFF_MAGIC {
            return Err(ExifError::InvalidMagic(magic));
        }

        let ifd_offset = byte_order.read_u32(&[data[base + 4], data[base + 5], data[base + 6], data[base + 7]]);
        debug!("First IFD offset: {}", ifd_offset);

        let decoder = ExifDecoder { data, byte_order };
        Ok((decoder, base.saturating_add(ifd_offset as usize)))
    }

    /// Returns the byte order declared by the TIFF header
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Walks the primary directory and any sub-directories it points to
    pub fn decode_directories(&self, ifd0_offset: usize) -> ExifResult<MetadataRecord> {
        let length = self.data.len();
        let mut state = DecodeState::new(length);
        state.record.byte_order = self.byte_order;

        self.walk_directory(IfdKind::Primary, ifd0_offset, &mut state)?;

        if Self::has_directory(state.exif_offset, length) {
            self.walk_directory(IfdKind::Exif, state.exif_offset, &mut state)?;
        } else {
            debug!("No EXIF sub-directory");
        }

        if Self::has_directory(state.gps_offset, length) {
            self.walk_directory(IfdKind::Gps, state.gps_offset, &mut state)?;
            apply_hemisphere_signs(&mut state.record);
        } else {
            debug!("No GPS sub-directory");
        }

        info!("Decoded EXIF block of {} bytes", length);
        Ok(state.record)
    }

    /// A pointer left at the `length` sentinel never passes this check
    fn has_directory(offset: usize, length: usize) -> bool {
        offset.checked_add(layout::NEXT_IFD_SIZE).map_or(false, |end| end <= length)
    }

    /// Walks one directory, dispatching each entry through `kind`'s handler table
    ///
    /// The whole directory (count, entries and next-directory pointer) must
    /// fit in the buffer before any entry is decoded.
    pub fn walk_directory(&self, kind: IfdKind, offset: usize, state: &mut DecodeState) -> ExifResult<()> {
        let length = self.data.len();
        let truncated = |entries: usize| ExifError::DirectoryTruncated {
            directory: kind.name(),
            offset,
            entries,
            length,
        };

        let count_bytes = array_at::<2>(self.data, offset).ok_or_else(|| truncated(0))?;
        let entry_count = self.byte_order.read_u16(count_bytes) as usize;
        debug!("{} directory at offset {}: {} entries", kind.name(), offset, entry_count);

        let first_entry = offset + layout::ENTRY_COUNT_SIZE;
        let required = (entry_count * layout::ENTRY_SIZE)
            .checked_add(first_entry)
            .and_then(|end| end.checked_add(layout::NEXT_IFD_SIZE));
        match required {
            Some(required) if required <= length => {}
            _ => return Err(truncated(entry_count)),
        }

        let ctx = EntryContext {
            data: self.data,
            base: header::TIFF_BASE,
        };

        for index in 0..entry_count {
            let position = first_entry + index * layout::ENTRY_SIZE;
            let raw = array_at::<12>(self.data, position).ok_or_else(|| truncated(entry_count))?;
            let entry = DirectoryEntry::decode(raw, self.byte_order);
            trace!("{} entry {}: tag={:#06x}, format={}, count={}",
                   kind.name(), index, entry.tag, entry.format, entry.count);

            dispatch::dispatch(kind, &entry, &ctx, state);
        }

        Ok(())
    }
}

/// Negates decimal coordinates for the southern and western hemispheres
/// and for altitudes below sea level. The stored components stay unsigned.
fn apply_hemisphere_signs(record: &mut MetadataRecord) {
    let geo = &mut record.geo_location;
    if geo.lat_components.direction == b'S' {
        geo.latitude = -geo.latitude;
    }
    if geo.lon_components.direction == b'W' {
        geo.longitude = -geo.longitude;
    }
    if geo.altitude_ref == 1 {
        geo.altitude = -geo.altitude;
    }
}
