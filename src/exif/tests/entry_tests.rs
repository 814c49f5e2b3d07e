//! Tests for directory entry decoding

use crate::exif::constants::field_types;
use crate::exif::entry::DirectoryEntry;
use crate::io::byte_order::ByteOrder;

fn entry_le(tag: u16, format: u16, count: u32, slot: [u8; 4]) -> DirectoryEntry {
    let mut raw = [0u8; 12];
    raw[0..2].copy_from_slice(&tag.to_le_bytes());
    raw[2..4].copy_from_slice(&format.to_le_bytes());
    raw[4..8].copy_from_slice(&count.to_le_bytes());
    raw[8..12].copy_from_slice(&slot);
    DirectoryEntry::decode(&raw, ByteOrder::LittleEndian)
}

#[test]
fn test_decode_little_endian() {
    let raw = [0x0F, 0x01, 0x02, 0x00, 0x04, 0x00, 0x00, 0x00, b'A', b'B', b'C', 0];
    let entry = DirectoryEntry::decode(&raw, ByteOrder::LittleEndian);

    assert_eq!(entry.tag, 0x010F);
    assert_eq!(entry.format, field_types::ASCII);
    assert_eq!(entry.count, 4);
    assert_eq!(entry.inline_value, [b'A', b'B', b'C', 0]);
}

#[test]
fn test_decode_big_endian() {
    let raw = [0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x06, 0x00, 0x00];
    let entry = DirectoryEntry::decode(&raw, ByteOrder::BigEndian);

    assert_eq!(entry.tag, 0x0112);
    assert_eq!(entry.format, field_types::SHORT);
    assert_eq!(entry.count, 1);
    assert_eq!(entry.as_u16(), 6);
}

#[test]
fn test_any_bytes_decode() {
    let entry = DirectoryEntry::decode(&[0xFF; 12], ByteOrder::LittleEndian);
    assert_eq!(entry.tag, 0xFFFF);
    assert_eq!(entry.format, 0xFFFF);
    assert_eq!(entry.count, u32::MAX);
    assert_eq!(entry.as_unsigned(), None);
}

#[test]
fn test_as_unsigned() {
    let long = entry_le(0xA002, field_types::LONG, 1, 4000u32.to_le_bytes());
    let short = entry_le(0xA002, field_types::SHORT, 1, [0xA0, 0x0F, 0xFF, 0xFF]);
    let ascii = entry_le(0xA002, field_types::ASCII, 1, [0; 4]);

    assert_eq!(long.as_unsigned(), Some(4000));
    assert_eq!(short.as_unsigned(), Some(4000));
    assert_eq!(ascii.as_unsigned(), None);
}

#[test]
fn test_inline_string_uses_count() {
    let entry = entry_le(0x010F, field_types::ASCII, 3, [b'A', b'B', b'C', b'D']);
    assert_eq!(entry.as_string(&[], 6), "ABC");
}

#[test]
fn test_out_of_line_string() {
    // base 6; string at TIFF offset 2 -> absolute 8
    let mut data = vec![0u8; 8];
    data.extend_from_slice(b"Canon EOS\0");
    let entry = entry_le(0x0110, field_types::ASCII, 10, 2u32.to_le_bytes());

    assert_eq!(entry.as_string(&data, 6), "Canon EOS");
}

#[test]
fn test_out_of_line_string_past_end() {
    let data = vec![0u8; 17];
    // 6 + 2 + 10 = 18 > 17
    let entry = entry_le(0x0110, field_types::ASCII, 10, 2u32.to_le_bytes());
    assert_eq!(entry.as_string(&data, 6), "");

    let huge = entry_le(0x0110, field_types::ASCII, 10, u32::MAX.to_le_bytes());
    assert_eq!(huge.as_string(&data, 6), "");
}

#[test]
fn test_rational_bounds() {
    // rational 10/4 at TIFF offset 0
    let mut data = vec![0u8; 6];
    data.extend_from_slice(&10u32.to_le_bytes());
    data.extend_from_slice(&4u32.to_le_bytes());

    let inside = entry_le(0x829D, field_types::RATIONAL, 1, 0u32.to_le_bytes());
    assert_eq!(inside.as_rational(&data, 6), 2.5);

    let outside = entry_le(0x829D, field_types::RATIONAL, 1, 1u32.to_le_bytes());
    assert_eq!(outside.as_rational(&data, 6), 0.0);
}

#[test]
fn test_rational_array_components() {
    let mut data = vec![0u8; 6];
    for (n, d) in [(51u32, 1u32), (30, 1), (1530, 100)] {
        data.extend_from_slice(&n.to_le_bytes());
        data.extend_from_slice(&d.to_le_bytes());
    }
    let entry = entry_le(2, field_types::RATIONAL, 3, 0u32.to_le_bytes());

    assert_eq!(entry.rational_at(&data, 6, 0), 51.0);
    assert_eq!(entry.rational_at(&data, 6, 1), 30.0);
    assert_eq!(entry.rational_at(&data, 6, 2), 15.3);
    assert_eq!(entry.rational_at(&data, 6, 3), 0.0);
}
