//! Seekable reader trait
//!
//! The JPEG scanner skips whole segments by seeking, so the stream form of
//! the scanner accepts anything that can both read and seek.

use std::io::{Read, Seek};

/// Trait for readers that can both read and seek
pub trait SeekableReader: Read + Seek {}

// Files, cursors over byte buffers, buffered readers
impl<T: Read + Seek> SeekableReader for T {}
