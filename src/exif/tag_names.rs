//! EXIF tag name definitions
//!
//! Human-readable tag names per directory, loaded from `exif_tags.toml`.
//! Only used to make log output readable.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::exif::dispatch::IfdKind;
use crate::exif::errors::{ExifError, ExifResult};

lazy_static! {
    static ref TAG_DEFINITIONS: TagDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        TagDefinitions::from_str(content).unwrap_or_else(|e| {
            log::warn!("Failed to parse EXIF tag definitions: {}", e);
            TagDefinitions::default()
        })
    };
}

/// Tag names for the three decoded directories
#[derive(Debug, Default)]
pub struct TagDefinitions {
    names: HashMap<IfdKind, HashMap<u16, String>>,
}

impl TagDefinitions {
    /// Parse tag definitions from a TOML string
    ///
    /// Each directory is a table keyed by hexadecimal (`"0x010F"`) or
    /// decimal tag numbers.
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = TagDefinitions::default();
        for kind in [IfdKind::Primary, IfdKind::Exif, IfdKind::Gps] {
            let target = defs.names.entry(kind).or_default();
            if let Some(table) = toml_value.get(kind.table_name()).and_then(|v| v.as_table()) {
                for (k, v) in table {
                    if let (Some(id), Some(name)) = (parse_tag_id(k), v.as_str()) {
                        target.insert(id, name.to_string());
                    }
                }
            }
        }

        Ok(defs)
    }

    /// Get a tag name by directory and ID
    pub fn get_tag_name(&self, kind: IfdKind, tag: u16) -> String {
        self.names
            .get(&kind)
            .and_then(|table| table.get(&tag))
            .cloned()
            .unwrap_or_else(|| format!("Unknown-{}", tag))
    }
}

fn parse_tag_id(key: &str) -> Option<u16> {
    match key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16).ok(),
        None => key.parse().ok(),
    }
}

/// Get the name of a tag in the given directory
pub fn get_tag_name(kind: IfdKind, tag: u16) -> String {
    TAG_DEFINITIONS.get_tag_name(kind, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_definitions() {
        assert_eq!(get_tag_name(IfdKind::Primary, 0x010F), "Make");
        assert_eq!(get_tag_name(IfdKind::Exif, 0x829A), "ExposureTime");
        assert_eq!(get_tag_name(IfdKind::Gps, 2), "GPSLatitude");
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(get_tag_name(IfdKind::Gps, 0x9999), "Unknown-39321");
    }

    #[test]
    fn test_decimal_and_hex_keys() {
        let defs = TagDefinitions::from_str("[primary]\n\"0x0110\" = \"Model\"\n\"274\" = \"Orientation\"\n")
            .unwrap();
        assert_eq!(defs.get_tag_name(IfdKind::Primary, 0x0110), "Model");
        assert_eq!(defs.get_tag_name(IfdKind::Primary, 274), "Orientation");
        assert_eq!(defs.get_tag_name(IfdKind::Exif, 274), "Unknown-274");
    }

    #[test]
    fn test_malformed_definitions() {
        assert!(TagDefinitions::from_str("[primary\n").is_err());
    }
}
