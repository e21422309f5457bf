//! request/decode.rs
//!
//! Deserializes a fixed 90-byte buffer into a `ReadRequest`.
//! All seven fields decode or the whole call fails.

use crate::constants::{offsets, CLIENT_NAME_WIDTH, LONG_WIDTH, POOL_ID_WIDTH, PROTO_LEN};
use crate::primitives::{bytes_to_long, bytes_to_string, trim_padding};
use crate::request::types::ReadRequest;
use crate::types::ProtocolError;

/// Deserialize exactly `PROTO_LEN` bytes into a `ReadRequest`.
///
/// # Errors
/// - `ShortRead` if fewer than `PROTO_LEN` bytes are given.
/// - `LengthMismatch` if more are given; the caller reads the exact count.
/// - `InvalidEncoding` if a text field is not UTF-8 once padding is removed.
pub fn decode_request(buf: &[u8]) -> Result<ReadRequest, ProtocolError> {
    if buf.len() < PROTO_LEN {
        return Err(ProtocolError::ShortRead { have: buf.len(), need: PROTO_LEN });
    }
    if buf.len() != PROTO_LEN {
        return Err(ProtocolError::LengthMismatch { expected: PROTO_LEN, actual: buf.len() });
    }

    let mut i = 0usize;
    fn get_long(buf: &[u8], i: &mut usize) -> Result<i64, ProtocolError> {
        let v = bytes_to_long(&buf[*i..*i + LONG_WIDTH])?;
        *i += LONG_WIDTH;
        Ok(v)
    }
    fn get_text(buf: &[u8], i: &mut usize, width: usize, field: &'static str) -> Result<String, ProtocolError> {
        let s = bytes_to_string(trim_padding(&buf[*i..*i + width])).map_err(|e| e.in_field(field))?;
        *i += width;
        Ok(s)
    }

    let pool_id          = get_text(buf, &mut i, POOL_ID_WIDTH, "pool_id")?;         // 0..10
    let block_id         = get_long(buf, &mut i)?;                                   // 10..18
    let block_length     = get_long(buf, &mut i)?;                                   // 18..26
    let generation_stamp = get_long(buf, &mut i)?;                                   // 26..34
    debug_assert_eq!(i, offsets::CLIENT_NAME);
    let client_name      = get_text(buf, &mut i, CLIENT_NAME_WIDTH, "client_name")?; // 34..74
    let read_offset      = get_long(buf, &mut i)?;                                   // 74..82
    let read_length      = get_long(buf, &mut i)?;                                   // 82..90

    debug_assert_eq!(i, PROTO_LEN, "decoding consumed incorrect length");

    Ok(ReadRequest::new(
        pool_id,
        block_id,
        block_length,
        generation_stamp,
        client_name,
        read_offset,
        read_length,
    ))
}
