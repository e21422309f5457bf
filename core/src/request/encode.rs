//! request/encode.rs
//!
//! Serializes a `ReadRequest` into a fixed 90-byte buffer.
//! Field order must match `decode.rs` and `constants::offsets` exactly.

use crate::constants::{offsets, CLIENT_NAME_WIDTH, LONG_WIDTH, POOL_ID_WIDTH, PROTO_LEN};
use crate::primitives::{long_to_bytes, string_to_bytes};
use crate::request::types::{check_text, ReadRequest};
use crate::types::ProtocolError;

/// Serialize a `ReadRequest` into its wire form.
///
/// # Returns
/// - `Ok([u8; PROTO_LEN])` with text fields zero-padded to their width.
/// - `Err(ProtocolError::OversizeField)` if a text field does not fit.
/// - `Err(ProtocolError::TrailingNul)` if a text field ends in NUL.
///   No buffer is produced in either case.
pub fn encode_request(r: &ReadRequest) -> Result<[u8; PROTO_LEN], ProtocolError> {
    check_text("pool_id", r.pool_id(), POOL_ID_WIDTH)?;
    check_text("client_name", r.client_name(), CLIENT_NAME_WIDTH)?;

    let mut out = [0u8; PROTO_LEN];
    let mut i = 0usize;

    fn put_long(out: &mut [u8], i: &mut usize, v: i64) {
        out[*i..*i + LONG_WIDTH].copy_from_slice(&long_to_bytes(v));
        *i += LONG_WIDTH;
    }
    // Copies the field's own bytes; the rest of the slot stays zero.
    fn put_text(out: &mut [u8], i: &mut usize, s: &str, width: usize) {
        let b = string_to_bytes(s);
        out[*i..*i + b.len()].copy_from_slice(b);
        *i += width;
    }

    put_text(&mut out, &mut i, r.pool_id(), POOL_ID_WIDTH);         // 0..10
    put_long(&mut out, &mut i, r.block_id());                       // 10..18
    put_long(&mut out, &mut i, r.block_length());                   // 18..26
    put_long(&mut out, &mut i, r.generation_stamp());               // 26..34
    put_text(&mut out, &mut i, r.client_name(), CLIENT_NAME_WIDTH); // 34..74
    put_long(&mut out, &mut i, r.read_offset());                    // 74..82
    put_long(&mut out, &mut i, r.read_length());                    // 82..90

    debug_assert_eq!(i, PROTO_LEN, "encoding wrote incorrect length");
    debug_assert_eq!(offsets::READ_LENGTH + LONG_WIDTH, i);

    Ok(out)
}

/// Encode into a caller-supplied buffer, returning the bytes written.
pub fn encode_request_into(r: &ReadRequest, dst: &mut [u8]) -> Result<usize, ProtocolError> {
    if dst.len() < PROTO_LEN {
        return Err(ProtocolError::LengthMismatch {
            expected: PROTO_LEN,
            actual: dst.len(),
        });
    }
    let buf = encode_request(r)?;
    dst[..PROTO_LEN].copy_from_slice(&buf);
    Ok(PROTO_LEN)
}
