use std::io;
use thiserror::Error;

use crate::utils::fmt_bytes;

/// Codec-level errors for the read request.
///
/// Returned to the caller as-is: the codec neither logs nor retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Fewer bytes than the fixed request length were supplied.
    #[error("short read: {have} < {need} bytes")]
    ShortRead { have: usize, need: usize },

    /// A text field does not fit its fixed wire width.
    #[error("field {field} is {len} bytes, wire width is {max}")]
    OversizeField {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A text field is not valid UTF-8 once padding is removed.
    #[error("invalid UTF-8 in {field} at byte {valid_up_to}: {}", fmt_bytes(.raw))]
    InvalidEncoding {
        field: &'static str,
        valid_up_to: usize,
        raw: Vec<u8>,
    },

    /// A text field ends in NUL, which decode cannot tell apart from padding.
    #[error("field {field} ends in NUL and would be read back as padding")]
    TrailingNul { field: &'static str },

    /// A buffer or slice is not exactly the expected length: an 8-byte
    /// integer slice, a whole record longer than `PROTO_LEN`, or a caller
    /// buffer too small to hold one.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The requested range is not inside the block.
    #[error("invalid range: offset {offset} + length {length} against block length {block_length}")]
    InvalidRange {
        offset: i64,
        length: i64,
        block_length: i64,
    },
}

impl ProtocolError {
    /// Attach the wire field name to an encoding error raised by a primitive.
    pub(crate) fn in_field(self, name: &'static str) -> Self {
        match self {
            ProtocolError::InvalidEncoding { valid_up_to, raw, .. } => {
                ProtocolError::InvalidEncoding { field: name, valid_up_to, raw }
            }
            other => other,
        }
    }
}

/// Errors raised by the stream adapters in [`crate::io`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// Underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bytes were transferred but do not form a valid request.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The stream ended before any byte of a request arrived.
    #[error("stream closed before a request was received")]
    Closed,
}
