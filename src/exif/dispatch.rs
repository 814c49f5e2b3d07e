//! Tag handler tables
//!
//! Each directory has its own table mapping a tag to the field type it must
//! carry and a function storing its value. Entries whose tag is not in the
//! table, or whose field type does not match, are skipped without error.

use std::collections::HashMap;

use lazy_static::lazy_static;
use log::{debug, trace};

use crate::exif::constants::{exif_tags, field_types, gps_tags, header, primary_tags};
use crate::exif::entry::DirectoryEntry;
use crate::exif::record::{Coordinate, MetadataRecord};
use crate::exif::tag_names;

/// The three directories decoded from an EXIF block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfdKind {
    /// IFD0, describing the main image
    Primary,
    /// EXIF sub-directory, pointed to by tag 0x8769
    Exif,
    /// GPS sub-directory, pointed to by tag 0x8825
    Gps,
}

impl IfdKind {
    /// Returns a string representation of this directory
    pub fn name(&self) -> &'static str {
        match self {
            IfdKind::Primary => "Primary",
            IfdKind::Exif => "EXIF",
            IfdKind::Gps => "GPS",
        }
    }

    /// Key of this directory's table in the tag name definitions
    pub(crate) fn table_name(&self) -> &'static str {
        match self {
            IfdKind::Primary => "primary",
            IfdKind::Exif => "exif",
            IfdKind::Gps => "gps",
        }
    }

    /// Returns the handler table for this directory
    pub fn handlers(&self) -> &'static HashMap<u16, TagHandler> {
        match self {
            IfdKind::Primary => &PRIMARY_HANDLERS,
            IfdKind::Exif => &EXIF_HANDLERS,
            IfdKind::Gps => &GPS_HANDLERS,
        }
    }
}

/// Where out-of-line values are read from
#[derive(Debug, Clone, Copy)]
pub struct EntryContext<'a> {
    /// The whole EXIF block
    pub data: &'a [u8],
    /// Position of the TIFF header inside `data`
    pub base: usize,
}

/// Mutable state threaded through the three directory walks
#[derive(Debug, Clone)]
pub struct DecodeState {
    pub record: MetadataRecord,
    /// Absolute offset of the EXIF sub-directory, `data.len()` if absent
    pub exif_offset: usize,
    /// Absolute offset of the GPS sub-directory, `data.len()` if absent
    pub gps_offset: usize,
}

impl DecodeState {
    /// Creates a state with an empty record and both pointers set to "absent"
    pub fn new(length: usize) -> Self {
        Self {
            record: MetadataRecord::empty(),
            exif_offset: length,
            gps_offset: length,
        }
    }
}

/// Field types a handler accepts
#[derive(Debug, Clone, Copy)]
pub enum FormatRule {
    /// Any field type; the handler reads the raw slot
    Any,
    /// One of the listed field type codes
    OneOf(&'static [u16]),
}

impl FormatRule {
    pub fn accepts(&self, format: u16) -> bool {
        match self {
            FormatRule::Any => true,
            FormatRule::OneOf(formats) => formats.contains(&format),
        }
    }
}

/// Stores an accepted entry into the decode state
pub type ApplyFn = fn(&DirectoryEntry, &EntryContext<'_>, &mut DecodeState);

/// Expected field type and decode function for one tag
#[derive(Clone, Copy)]
pub struct TagHandler {
    pub formats: FormatRule,
    pub apply: ApplyFn,
}

impl TagHandler {
    fn new(formats: FormatRule, apply: ApplyFn) -> Self {
        Self { formats, apply }
    }
}

const ASCII: FormatRule = FormatRule::OneOf(&[field_types::ASCII]);
const SHORT: FormatRule = FormatRule::OneOf(&[field_types::SHORT]);
const RATIONAL: FormatRule = FormatRule::OneOf(&[field_types::RATIONAL]);
const LONG_OR_SHORT: FormatRule = FormatRule::OneOf(&[field_types::LONG, field_types::SHORT]);

lazy_static! {
    static ref PRIMARY_HANDLERS: HashMap<u16, TagHandler> = {
        let mut m: HashMap<u16, TagHandler> = HashMap::new();
        m.insert(primary_tags::BITS_PER_SAMPLE, TagHandler::new(SHORT, |e, _, s| {
            s.record.bits_per_sample = e.as_u16();
        }));
        m.insert(primary_tags::IMAGE_DESCRIPTION, TagHandler::new(ASCII, |e, c, s| {
            s.record.image_description = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::MAKE, TagHandler::new(ASCII, |e, c, s| {
            s.record.make = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::MODEL, TagHandler::new(ASCII, |e, c, s| {
            s.record.model = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::ORIENTATION, TagHandler::new(SHORT, |e, _, s| {
            s.record.orientation = e.as_u16();
        }));
        m.insert(primary_tags::SOFTWARE, TagHandler::new(ASCII, |e, c, s| {
            s.record.software = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::DATE_TIME, TagHandler::new(ASCII, |e, c, s| {
            s.record.date_time = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::COPYRIGHT, TagHandler::new(ASCII, |e, c, s| {
            s.record.copyright = e.as_string(c.data, c.base);
        }));
        m.insert(primary_tags::GPS_IFD_POINTER, TagHandler::new(FormatRule::Any, |e, _, s| {
            s.gps_offset = header::TIFF_BASE.saturating_add(e.as_u32() as usize);
        }));
        m.insert(primary_tags::EXIF_IFD_POINTER, TagHandler::new(FormatRule::Any, |e, _, s| {
            s.exif_offset = header::TIFF_BASE.saturating_add(e.as_u32() as usize);
        }));
        m
    };

    static ref EXIF_HANDLERS: HashMap<u16, TagHandler> = {
        let mut m: HashMap<u16, TagHandler> = HashMap::new();
        m.insert(exif_tags::EXPOSURE_TIME, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.exposure_time = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::F_NUMBER, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.f_number = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::EXPOSURE_PROGRAM, TagHandler::new(SHORT, |e, _, s| {
            s.record.exposure_program = e.as_u16();
        }));
        m.insert(exif_tags::ISO_SPEED_RATINGS, TagHandler::new(SHORT, |e, _, s| {
            s.record.iso_speed_ratings = e.as_u16();
        }));
        m.insert(exif_tags::DATE_TIME_ORIGINAL, TagHandler::new(ASCII, |e, c, s| {
            s.record.date_time_original = e.as_string(c.data, c.base);
        }));
        m.insert(exif_tags::DATE_TIME_DIGITIZED, TagHandler::new(ASCII, |e, c, s| {
            s.record.date_time_digitized = e.as_string(c.data, c.base);
        }));
        m.insert(exif_tags::SHUTTER_SPEED_VALUE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.shutter_speed_value = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::APERTURE_VALUE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.aperture_value = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::EXPOSURE_BIAS_VALUE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.exposure_bias_value = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::MAX_APERTURE_VALUE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.max_aperture_value = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::SUBJECT_DISTANCE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.subject_distance = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::FLASH, TagHandler::new(SHORT, |e, _, s| {
            s.record.flash = e.as_u16() != 0;
        }));
        m.insert(exif_tags::FOCAL_LENGTH, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.focal_length = e.as_rational(c.data, c.base);
        }));
        m.insert(exif_tags::METERING_MODE, TagHandler::new(SHORT, |e, _, s| {
            s.record.metering_mode = e.as_u16();
        }));
        m.insert(exif_tags::SUB_SEC_TIME_ORIGINAL, TagHandler::new(ASCII, |e, c, s| {
            s.record.sub_sec_time_original = e.as_string(c.data, c.base);
        }));
        m.insert(exif_tags::IMAGE_WIDTH, TagHandler::new(LONG_OR_SHORT, |e, _, s| {
            if let Some(width) = e.as_unsigned() {
                s.record.image_width = width;
            }
        }));
        m.insert(exif_tags::IMAGE_HEIGHT, TagHandler::new(LONG_OR_SHORT, |e, _, s| {
            if let Some(height) = e.as_unsigned() {
                s.record.image_height = height;
            }
        }));
        m.insert(exif_tags::FOCAL_LENGTH_IN_35MM, TagHandler::new(SHORT, |e, _, s| {
            s.record.focal_length_in_35mm = e.as_u16();
        }));
        m
    };

    static ref GPS_HANDLERS: HashMap<u16, TagHandler> = {
        let mut m: HashMap<u16, TagHandler> = HashMap::new();
        m.insert(gps_tags::LATITUDE_REF, TagHandler::new(FormatRule::Any, |e, _, s| {
            s.record.geo_location.lat_components.direction = e.as_u8();
        }));
        m.insert(gps_tags::LATITUDE, TagHandler::new(RATIONAL, |e, c, s| {
            let geo = &mut s.record.geo_location;
            if read_components(e, c, &mut geo.lat_components) {
                geo.latitude = geo.lat_components.to_decimal();
            }
        }));
        m.insert(gps_tags::LONGITUDE_REF, TagHandler::new(FormatRule::Any, |e, _, s| {
            s.record.geo_location.lon_components.direction = e.as_u8();
        }));
        m.insert(gps_tags::LONGITUDE, TagHandler::new(RATIONAL, |e, c, s| {
            let geo = &mut s.record.geo_location;
            if read_components(e, c, &mut geo.lon_components) {
                geo.longitude = geo.lon_components.to_decimal();
            }
        }));
        m.insert(gps_tags::ALTITUDE_REF, TagHandler::new(FormatRule::Any, |e, _, s| {
            s.record.geo_location.altitude_ref = e.as_u8();
        }));
        m.insert(gps_tags::ALTITUDE, TagHandler::new(RATIONAL, |e, c, s| {
            s.record.geo_location.altitude = e.as_rational(c.data, c.base);
        }));
        m
    };
}

/// Reads a degrees/minutes/seconds triple; entries with any other count are skipped
fn read_components(entry: &DirectoryEntry, ctx: &EntryContext<'_>, coord: &mut Coordinate) -> bool {
    if entry.count != 3 {
        debug!("GPS tag {} has {} components, expected 3; skipping", entry.tag, entry.count);
        return false;
    }

    coord.degrees = entry.rational_at(ctx.data, ctx.base, 0);
    coord.minutes = entry.rational_at(ctx.data, ctx.base, 1);
    coord.seconds = entry.rational_at(ctx.data, ctx.base, 2);
    true
}

/// Applies the handler registered for `entry.tag` in `kind`'s table
///
/// Returns true if the entry was stored, false if it was unknown or skipped.
pub fn dispatch(kind: IfdKind, entry: &DirectoryEntry, ctx: &EntryContext<'_>, state: &mut DecodeState) -> bool {
    let handler = match kind.handlers().get(&entry.tag) {
        Some(handler) => handler,
        None => {
            trace!("{} directory: ignoring tag {:#06x}", kind.name(), entry.tag);
            return false;
        }
    };

    if !handler.formats.accepts(entry.format) {
        debug!("{} directory: tag {:#06x} ({}) has field type {}, skipping",
               kind.name(), entry.tag, tag_names::get_tag_name(kind, entry.tag), entry.format);
        return false;
    }

    trace!("{} directory: decoding tag {:#06x} ({})",
           kind.name(), entry.tag, tag_names::get_tag_name(kind, entry.tag));
    (handler.apply)(entry, ctx, state);
    true
}
