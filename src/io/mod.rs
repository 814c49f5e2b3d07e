//! I/O utilities
//!
//! This module provides byte order handling and the reader trait used
//! when scanning a JPEG stream.

pub mod seekable;
pub mod byte_order;
