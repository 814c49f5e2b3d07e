//! Bounds-checked slice views
//!
//! Every read from an EXIF buffer goes through these helpers. Offsets come
//! from the file itself, so the range is validated with checked arithmetic
//! before any byte is touched.

use std::ops::Range;

/// Returns the `N` bytes starting at `offset`, or None if they do not all fit
pub fn array_at<const N: usize>(data: &[u8], offset: usize) -> Option<&[u8; N]> {
    let end = offset.checked_add(N)?;
    data.get(offset..end)?.try_into().ok()
}

/// Returns `start..start + len` if that range ends at or before `end`
pub fn checked_range(start: usize, len: usize, end: usize) -> Option<Range<usize>> {
    let stop = start.checked_add(len)?;
    if stop <= end {
        Some(start..stop)
    } else {
        None
    }
}
