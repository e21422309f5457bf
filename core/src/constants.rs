//! constants.rs
//! Wire layout of the read request: widths, offsets and total length.

/// Wire layout version of the read request.
/// Not transmitted; both peers must be built against the same layout.
/// Version 1 is the 90-byte shape without a leading datanode address.
pub const WIRE_VERSION: u16 = 1;

/// Width of every integer field on the wire.
pub const LONG_WIDTH: usize = 8;

/// Fixed wire width of the pool id (UTF-8, zero-padded).
pub const POOL_ID_WIDTH: usize = 10;

/// Fixed wire width of the client name (UTF-8, zero-padded).
pub const CLIENT_NAME_WIDTH: usize = 40;

/// Number of integer fields in a read request.
pub const LONG_FIELDS: usize = 5;

/// Total encoded size of a read request.
pub const PROTO_LEN: usize = POOL_ID_WIDTH + CLIENT_NAME_WIDTH + LONG_FIELDS * LONG_WIDTH;

/// Start offset of each field in the encoded request.
pub mod offsets {
    use super::{CLIENT_NAME_WIDTH, LONG_WIDTH, POOL_ID_WIDTH};

    pub const POOL_ID: usize          = 0;
    pub const BLOCK_ID: usize         = POOL_ID + POOL_ID_WIDTH;
    pub const BLOCK_LENGTH: usize     = BLOCK_ID + LONG_WIDTH;
    pub const GENERATION_STAMP: usize = BLOCK_LENGTH + LONG_WIDTH;
    pub const CLIENT_NAME: usize      = GENERATION_STAMP + LONG_WIDTH;
    pub const READ_OFFSET: usize      = CLIENT_NAME + CLIENT_NAME_WIDTH;
    pub const READ_LENGTH: usize      = READ_OFFSET + LONG_WIDTH;
}

const _: () = assert!(PROTO_LEN == 90);
const _: () = assert!(offsets::READ_LENGTH + LONG_WIDTH == PROTO_LEN);
