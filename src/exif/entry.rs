//! Directory entry structures and methods
//!
//! A directory entry is a fixed 12-byte record: tag, field type, element
//! count and a 4-byte slot. The slot holds the value itself when it fits in
//! four bytes, otherwise an offset (relative to the TIFF header) to where
//! the value is stored.

use log::{trace, warn};

use crate::exif::constants::{field_types, layout};
use crate::io::byte_order::ByteOrder;
use crate::utils::slice_utils::{array_at, checked_range};
use crate::utils::string_utils::ascii_to_string;

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag identifier
    pub tag: u16,
    /// Field type code
    pub format: u16,
    /// Number of values, in units of the field type
    pub count: u32,
    /// Raw value or offset slot, in file byte order
    pub inline_value: [u8; 4],
    /// Byte order of the directory this entry came from
    pub byte_order: ByteOrder,
}

impl DirectoryEntry {
    /// Decodes an entry from its 12 on-disk bytes
    ///
    /// Any 12 bytes decode to some entry; whether the field type or count
    /// make sense is up to the caller.
    pub fn decode(raw: &[u8; 12], byte_order: ByteOrder) -> Self {
        let tag = byte_order.read_u16(&[raw[0], raw[1]]);
        let format = byte_order.read_u16(&[raw[2], raw[3]]);
        let count = byte_order.read_u32(&[raw[4], raw[5], raw[6], raw[7]]);
        let inline_value = [raw[8], raw[9], raw[10], raw[11]];

        Self {
            tag,
            format,
            count,
            inline_value,
            byte_order,
        }
    }

    /// First byte of the value slot
    pub fn as_u8(&self) -> u8 {
        self.inline_value[0]
    }

    /// Value slot read as a SHORT
    pub fn as_u16(&self) -> u16 {
        self.byte_order.read_u16(&[self.inline_value[0], self.inline_value[1]])
    }

    /// Value slot read as a LONG, also used when the slot holds an offset
    pub fn as_u32(&self) -> u32 {
        self.byte_order.read_u32(&self.inline_value)
    }

    /// Value slot read as an unsigned integer of the entry's own width
    ///
    /// Returns None unless the field type is SHORT or LONG.
    pub fn as_unsigned(&self) -> Option<u32> {
        match self.format {
            field_types::LONG => Some(self.as_u32()),
            field_types::SHORT => Some(self.as_u16() as u32),
            _ => None,
        }
    }

    /// Reads the value as a string
    ///
    /// `data` is the whole EXIF block and `base` the position of the TIFF
    /// header within it. Values of four bytes or less come from the slot;
    /// longer values are read at `base + offset` only if all `count` bytes
    /// lie inside `data`, otherwise the result is empty.
    pub fn as_string(&self, data: &[u8], base: usize) -> String {
        let count = self.count as usize;
        if count <= layout::INLINE_VALUE_SIZE {
            return ascii_to_string(&self.inline_value[..count]);
        }

        let offset = self.as_u32() as usize;
        let range = base
            .checked_add(offset)
            .and_then(|start| checked_range(start, count, data.len()));

        match range {
            Some(range) => ascii_to_string(&data[range]),
            None => {
                warn!("Tag {:#06x}: string of {} bytes at offset {} lies outside the {}-byte block",
                      self.tag, count, offset, data.len());
                String::new()
            }
        }
    }

    /// Reads the rational stored at the entry's offset
    ///
    /// Returns `0.0` if the 8 bytes do not lie inside `data`.
    pub fn as_rational(&self, data: &[u8], base: usize) -> f64 {
        self.rational_at(data, base, 0)
    }

    /// Reads the `index`-th rational of an out-of-line rational array
    ///
    /// Returns `0.0` if the 8 bytes do not lie inside `data`.
    pub fn rational_at(&self, data: &[u8], base: usize, index: usize) -> f64 {
        let offset = self.as_u32() as usize;
        let position = index
            .checked_mul(layout::RATIONAL_SIZE)
            .and_then(|skip| base.checked_add(skip))
            .and_then(|start| start.checked_add(offset));

        match position.and_then(|pos| array_at::<8>(data, pos)) {
            Some(raw) => {
                let value = self.byte_order.read_rational(raw);
                trace!("Tag {:#06x}: rational[{}] at offset {} = {}", self.tag, index, offset, value);
                value
            }
            None => {
                warn!("Tag {:#06x}: rational[{}] at offset {} lies outside the {}-byte block",
                      self.tag, index, offset, data.len());
                0.0
            }
        }
    }
}
