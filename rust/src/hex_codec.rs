//! Hex <-> bytes conversion for golden payloads.
//!
//! Input is case-insensitive, output is always uppercase with no separators.

use crate::error::MalformedHexError;

/// Decode a hex string, two characters per byte, high nibble first.
///
/// Odd-length input and non-hex characters are errors, never truncated.
#[inline]
pub fn decode_hex(s: &str) -> Result<Vec<u8>, MalformedHexError> {
    Ok(hex::decode(s)?)
}

/// Encode bytes as uppercase hex pairs.
#[inline]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Uppercase form of a payload, the comparison key for round-trips.
#[inline]
pub fn normalize_hex(s: &str) -> String {
    s.to_ascii_uppercase()
}
