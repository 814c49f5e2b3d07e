//! Tests for the JPEG module
