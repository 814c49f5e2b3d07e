//! Tests for the tag handler tables

use crate::exif::constants::{exif_tags, field_types, gps_tags, primary_tags};
use crate::exif::dispatch::{dispatch, DecodeState, EntryContext, FormatRule, IfdKind};
use crate::exif::entry::DirectoryEntry;
use crate::io::byte_order::ByteOrder;

fn entry(tag: u16, format: u16, count: u32, slot: [u8; 4]) -> DirectoryEntry {
    DirectoryEntry {
        tag,
        format,
        count,
        inline_value: slot,
        byte_order: ByteOrder::LittleEndian,
    }
}

const CTX: EntryContext<'static> = EntryContext { data: &[], base: 6 };

#[test]
fn test_tables_cover_expected_tags() {
    let primary = IfdKind::Primary.handlers();
    assert_eq!(primary.len(), 10);
    assert!(primary.contains_key(&primary_tags::EXIF_IFD_POINTER));
    assert!(primary.contains_key(&primary_tags::GPS_IFD_POINTER));

    assert_eq!(IfdKind::Exif.handlers().len(), 18);
    assert_eq!(IfdKind::Gps.handlers().len(), 6);
}

#[test]
fn test_tag_tables_are_per_directory() {
    // Tag 2 is GPSLatitude in the GPS directory but means nothing elsewhere
    assert!(IfdKind::Gps.handlers().contains_key(&gps_tags::LATITUDE));
    assert!(!IfdKind::Primary.handlers().contains_key(&gps_tags::LATITUDE));
    assert!(!IfdKind::Exif.handlers().contains_key(&primary_tags::MAKE));
}

#[test]
fn test_format_rule() {
    assert!(FormatRule::Any.accepts(0xFFFF));
    let rule = FormatRule::OneOf(&[field_types::LONG, field_types::SHORT]);
    assert!(rule.accepts(field_types::SHORT));
    assert!(!rule.accepts(field_types::ASCII));
}

#[test]
fn test_dispatch_stores_matching_entry() {
    let mut state = DecodeState::new(100);
    let orientation = entry(primary_tags::ORIENTATION, field_types::SHORT, 1, [3, 0, 0, 0]);

    assert!(dispatch(IfdKind::Primary, &orientation, &CTX, &mut state));
    assert_eq!(state.record.orientation, 3);
}

#[test]
fn test_dispatch_skips_mismatched_format() {
    let mut state = DecodeState::new(100);
    let iso = entry(exif_tags::ISO_SPEED_RATINGS, field_types::LONG, 1, [100, 0, 0, 0]);

    assert!(!dispatch(IfdKind::Exif, &iso, &CTX, &mut state));
    assert_eq!(state.record.iso_speed_ratings, 0);
}

#[test]
fn test_dispatch_records_pointers() {
    let mut state = DecodeState::new(100);
    assert_eq!(state.exif_offset, 100);
    assert_eq!(state.gps_offset, 100);

    let exif = entry(primary_tags::EXIF_IFD_POINTER, field_types::LONG, 1, [26, 0, 0, 0]);
    let gps = entry(primary_tags::GPS_IFD_POINTER, field_types::LONG, 1, [60, 0, 0, 0]);
    dispatch(IfdKind::Primary, &exif, &CTX, &mut state);
    dispatch(IfdKind::Primary, &gps, &CTX, &mut state);

    assert_eq!(state.exif_offset, 32);
    assert_eq!(state.gps_offset, 66);
}

#[test]
fn test_dispatch_reads_direction_from_any_format() {
    let mut state = DecodeState::new(100);
    let lat_ref = entry(gps_tags::LATITUDE_REF, field_types::BYTE, 1, [b'N', 0, 0, 0]);

    assert!(dispatch(IfdKind::Gps, &lat_ref, &CTX, &mut state));
    assert_eq!(state.record.geo_location.lat_components.direction, b'N');
}
