//! String utility functions

/// Trims trailing null characters from a byte slice
pub fn trim_trailing_nulls(bytes: &[u8]) -> &[u8] {
    let len = bytes.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
    &bytes[..len]
}

/// Converts an ASCII field to a String, dropping NUL padding
///
/// Producers occasionally write UTF-8 into ASCII fields, so invalid
/// sequences are replaced rather than rejected.
pub fn ascii_to_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(trim_trailing_nulls(bytes)).into_owned()
}
