//! Tests for the byte order module

use crate::io::byte_order::ByteOrder;
use crate::exif::errors::ExifError;

#[test]
fn test_byte_order_detection_little_endian() {
    let result = ByteOrder::detect(b"II");
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let result = ByteOrder::detect(b"MM");
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let result = ByteOrder::detect(&[0x12, 0x34]);
    assert!(matches!(result, Err(ExifError::InvalidByteOrder(0x1234))));
}

#[test]
fn test_little_endian_reads() {
    let order = ByteOrder::LittleEndian;
    assert_eq!(order.read_u16(&[0x34, 0x12]), 0x1234);
    assert_eq!(order.read_u32(&[0x78, 0x56, 0x34, 0x12]), 0x12345678);
}

#[test]
fn test_big_endian_reads() {
    let order = ByteOrder::BigEndian;
    assert_eq!(order.read_u16(&[0x12, 0x34]), 0x1234);
    assert_eq!(order.read_u32(&[0x12, 0x34, 0x56, 0x78]), 0x12345678);
}

#[test]
fn test_read_rational() {
    // 1/250 in both orders
    let le = [250, 0, 0, 0, 0xE8, 0x03, 0, 0];
    let be = [0, 0, 0, 250, 0, 0, 0x03, 0xE8];
    assert_eq!(ByteOrder::LittleEndian.read_rational(&le), 0.25);
    assert_eq!(ByteOrder::BigEndian.read_rational(&be), 0.25);
}

#[test]
fn test_read_rational_zero_denominator() {
    let raw = [0, 0, 0, 7, 0, 0, 0, 0];
    assert_eq!(ByteOrder::BigEndian.read_rational(&raw), 0.0);
}
