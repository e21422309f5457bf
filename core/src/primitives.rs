//! primitives.rs
//! Fixed-width conversions between native values and wire bytes.
//!
//! Design notes:
//! - Integers are big-endian, 8 bytes.
//! - Text is UTF-8 at its natural length; padding to field width is the
//!   request codec's job.
//! - Every call works on its own stack buffer, so these are safe to call
//!   from any number of threads.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::LONG_WIDTH;
use crate::types::ProtocolError;

/// Encode a 64-bit integer as 8 big-endian bytes.
#[inline]
pub fn long_to_bytes(v: i64) -> [u8; LONG_WIDTH] {
    let mut out = [0u8; LONG_WIDTH];
    BigEndian::write_i64(&mut out, v);
    out
}

/// Decode 8 big-endian bytes into a 64-bit integer.
#[inline]
pub fn bytes_to_long(bytes: &[u8]) -> Result<i64, ProtocolError> {
    if bytes.len() != LONG_WIDTH {
        return Err(ProtocolError::LengthMismatch {
            expected: LONG_WIDTH,
            actual: bytes.len(),
        });
    }
    Ok(BigEndian::read_i64(bytes))
}

#[inline]
pub fn string_to_bytes(s: &str) -> &[u8] {
    s.as_bytes()
}

/// Decode UTF-8 text. The error carries the offending bytes.
pub fn bytes_to_string(bytes: &[u8]) -> Result<String, ProtocolError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(ProtocolError::InvalidEncoding {
            field: "text",
            valid_up_to: e.valid_up_to(),
            raw: bytes.to_vec(),
        }),
    }
}

/// Strip trailing zero padding from a fixed-width text field.
#[inline]
pub fn trim_padding(field: &[u8]) -> &[u8] {
    let end = field.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &field[..end]
}
