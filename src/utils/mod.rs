//! Utility modules for common functionality

pub(crate) mod slice_utils;
pub(crate) mod string_utils;
