//! Tests for the EXIF module

mod byte_order_tests;
mod entry_tests;
mod dispatch_tests;
