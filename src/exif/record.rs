//! Decoded metadata structures

use std::fmt;

use crate::io::byte_order::ByteOrder;

/// One GPS axis expressed as degrees, minutes and seconds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    /// Hemisphere byte: `N`/`S` for latitude, `E`/`W` for longitude, 0 if absent
    pub direction: u8,
}

impl Coordinate {
    /// Unsigned decimal degrees
    pub fn to_decimal(&self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }
}

/// GPS information embedded in the file
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoLocation {
    /// Signed decimal latitude, negative south of the equator
    pub latitude: f64,
    /// Signed decimal longitude, negative west of Greenwich
    pub longitude: f64,
    /// Signed altitude in meters relative to sea level
    pub altitude: f64,
    /// 0 = above sea level, 1 = below sea level
    pub altitude_ref: u8,
    /// Latitude as stored, always unsigned
    pub lat_components: Coordinate,
    /// Longitude as stored, always unsigned
    pub lon_components: Coordinate,
}

/// Metadata decoded from an EXIF block
///
/// Fields whose tag is missing, or present with an unexpected field type,
/// keep their zero value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataRecord {
    /// Byte order declared by the TIFF header
    pub byte_order: ByteOrder,

    // Primary image directory
    pub image_description: String,
    pub make: String,
    pub model: String,
    /// 1 = upper left, 3 = lower right, 6 = upper right, 8 = lower left, 0 = unspecified
    pub orientation: u16,
    pub bits_per_sample: u16,
    pub software: String,
    pub date_time: String,
    pub sub_sec_time_original: String,
    pub copyright: String,

    // EXIF sub-directory
    /// Exposure time in seconds
    pub exposure_time: f64,
    pub f_number: f64,
    /// 0 = not defined, 1 = manual, 2 = normal program, 3 = aperture priority, ...
    pub exposure_program: u16,
    pub iso_speed_ratings: u16,
    pub date_time_original: String,
    pub date_time_digitized: String,
    pub shutter_speed_value: f64,
    pub aperture_value: f64,
    /// Exposure bias in EV
    pub exposure_bias_value: f64,
    pub max_aperture_value: f64,
    /// Distance to focus point in meters
    pub subject_distance: f64,
    /// 1 = average, 2 = center weighted, 3 = spot, 4 = multi-spot, 5 = multi-segment
    pub metering_mode: u16,
    pub flash: bool,
    /// Focal length in millimeters
    pub focal_length: f64,
    pub focal_length_in_35mm: u16,
    pub image_width: u32,
    pub image_height: u32,

    // GPS sub-directory
    pub geo_location: GeoLocation,
}

impl MetadataRecord {
    /// Creates a record with every field at its zero value
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any GPS coordinate was decoded
    pub fn has_location(&self) -> bool {
        self.geo_location.latitude != 0.0 || self.geo_location.longitude != 0.0
    }
}

impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EXIF Metadata ({}):", self.byte_order.name())?;
        writeln!(f, "  Camera make: {}", self.make)?;
        writeln!(f, "  Camera model: {}", self.model)?;
        writeln!(f, "  Software: {}", self.software)?;
        writeln!(f, "  Image description: {}", self.image_description)?;
        writeln!(f, "  Copyright: {}", self.copyright)?;
        writeln!(f, "  Bits per sample: {}", self.bits_per_sample)?;
        writeln!(f, "  Image width: {}", self.image_width)?;
        writeln!(f, "  Image height: {}", self.image_height)?;
        writeln!(f, "  Image orientation: {}", self.orientation)?;
        writeln!(f, "  Image date/time: {}", self.date_time)?;
        writeln!(f, "  Original date/time: {}", self.date_time_original)?;
        writeln!(f, "  Digitize date/time: {}", self.date_time_digitized)?;
        writeln!(f, "  Subsecond time: {}", self.sub_sec_time_original)?;
        writeln!(f, "  Exposure time: 1/{}", reciprocal(self.exposure_time))?;
        writeln!(f, "  F-stop: f/{:.1}", self.f_number)?;
        writeln!(f, "  Exposure program: {}", self.exposure_program)?;
        writeln!(f, "  ISO speed: {}", self.iso_speed_ratings)?;
        writeln!(f, "  Subject distance: {} m", self.subject_distance)?;
        writeln!(f, "  Exposure bias: {} EV", self.exposure_bias_value)?;
        writeln!(f, "  Max aperture: {}", self.max_aperture_value)?;
        writeln!(f, "  Flash used?: {}", self.flash)?;
        writeln!(f, "  Metering mode: {}", self.metering_mode)?;
        writeln!(f, "  Lens focal length: {} mm", self.focal_length)?;
        writeln!(f, "  35mm focal length: {} mm", self.focal_length_in_35mm)?;

        let geo = &self.geo_location;
        writeln!(f, "  GPS Latitude: {} deg ({} deg, {} min, {} sec {})",
                 geo.latitude, geo.lat_components.degrees, geo.lat_components.minutes,
                 geo.lat_components.seconds, direction_char(geo.lat_components.direction))?;
        writeln!(f, "  GPS Longitude: {} deg ({} deg, {} min, {} sec {})",
                 geo.longitude, geo.lon_components.degrees, geo.lon_components.minutes,
                 geo.lon_components.seconds, direction_char(geo.lon_components.direction))?;
        writeln!(f, "  GPS Altitude: {} m", geo.altitude)?;

        Ok(())
    }
}

fn reciprocal(value: f64) -> u32 {
    if value > 0.0 {
        (1.0 / value).round() as u32
    } else {
        0
    }
}

fn direction_char(direction: u8) -> char {
    if direction.is_ascii_alphabetic() {
        direction as char
    } else {
        '?'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_zeroed() {
        let record = MetadataRecord::empty();
        assert!(record.make.is_empty());
        assert_eq!(record.orientation, 0);
        assert_eq!(record.exposure_time, 0.0);
        assert!(!record.flash);
        assert_eq!(record.byte_order, ByteOrder::LittleEndian);
        assert!(!record.has_location());
    }

    #[test]
    fn test_coordinate_to_decimal() {
        let coord = Coordinate { degrees: 40.0, minutes: 30.0, seconds: 36.0, direction: b'N' };
        assert!((coord.to_decimal() - 40.51).abs() < 1e-9);
    }
}
