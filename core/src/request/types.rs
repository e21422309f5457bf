//! request/types.rs
//! Read request value and the block address it carries.

use std::fmt;

use crate::constants::{CLIENT_NAME_WIDTH, POOL_ID_WIDTH, PROTO_LEN};
use crate::types::ProtocolError;

/// Address of one replica of one block generation.
///
/// This is the key the storage side uses to find the block on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtendedBlock {
    pub pool_id: String,
    pub block_id: i64,
    pub num_bytes: i64,
    pub generation_stamp: i64,
}

impl ExtendedBlock {
    pub fn new(pool_id: impl Into<String>, block_id: i64, num_bytes: i64, generation_stamp: i64) -> Self {
        Self {
            pool_id: pool_id.into(),
            block_id,
            num_bytes,
            generation_stamp,
        }
    }
}

impl fmt::Display for ExtendedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:blk_{}_{}", self.pool_id, self.block_id, self.generation_stamp)
    }
}

/// Request to read `read_length` bytes at `read_offset` of a block replica.
///
/// Immutable: built once by the requester, decoded into an independent
/// value by the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pool_id: String,
    block_id: i64,
    block_length: i64,
    generation_stamp: i64,
    client_name: String,
    read_offset: i64,
    read_length: i64,
}

impl ReadRequest {
    pub const LEN: usize = PROTO_LEN;

    pub fn new(
        pool_id: impl Into<String>,
        block_id: i64,
        block_length: i64,
        generation_stamp: i64,
        client_name: impl Into<String>,
        read_offset: i64,
        read_length: i64,
    ) -> Self {
        Self {
            pool_id: pool_id.into(),
            block_id,
            block_length,
            generation_stamp,
            client_name: client_name.into(),
            read_offset,
            read_length,
        }
    }

    /// Build a request for a range of an already resolved block.
    pub fn for_block(
        block: ExtendedBlock,
        client_name: impl Into<String>,
        read_offset: i64,
        read_length: i64,
    ) -> Self {
        Self {
            pool_id: block.pool_id,
            block_id: block.block_id,
            block_length: block.num_bytes,
            generation_stamp: block.generation_stamp,
            client_name: client_name.into(),
            read_offset,
            read_length,
        }
    }

    /// Canonical request for tests.
    /// Guaranteed to pass `validate()` unless a regression is introduced.
    pub fn test_request() -> Self {
        Self::new("bp-1", 42, 1024, 7, "client-7", 100, 50)
    }

    pub fn pool_id(&self) -> &str {
        &self.pool_id
    }

    pub fn block_id(&self) -> i64 {
        self.block_id
    }

    pub fn block_length(&self) -> i64 {
        self.block_length
    }

    pub fn generation_stamp(&self) -> i64 {
        self.generation_stamp
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn read_offset(&self) -> i64 {
        self.read_offset
    }

    pub fn read_length(&self) -> i64 {
        self.read_length
    }

    /// Storage lookup key for this request.
    pub fn block(&self) -> ExtendedBlock {
        ExtendedBlock::new(
            self.pool_id.clone(),
            self.block_id,
            self.block_length,
            self.generation_stamp,
        )
    }

    #[inline]
    pub const fn encoded_len(&self) -> usize {
        PROTO_LEN
    }

    /// Full pre-flight check for the side that services the request.
    ///
    /// Neither `encode_request` nor `decode_request` calls this; range
    /// checks against the block belong to the storage collaborator.
    pub fn validate(&self) -> Result<(), ProtocolError> {
        check_text("pool_id", &self.pool_id, POOL_ID_WIDTH)?;
        check_text("client_name", &self.client_name, CLIENT_NAME_WIDTH)?;

        let in_block = self.read_offset >= 0
            && self.read_length > 0
            && self
                .read_offset
                .checked_add(self.read_length)
                .is_some_and(|end| end <= self.block_length);
        if !in_block {
            return Err(ProtocolError::InvalidRange {
                offset: self.read_offset,
                length: self.read_length,
                block_length: self.block_length,
            });
        }

        Ok(())
    }

    /// One-line description for logs.
    pub fn summary(&self) -> String {
        format!(
            "read {} [{}+{}] len={} client={}",
            self.block(),
            self.read_offset,
            self.read_length,
            self.block_length,
            self.client_name,
        )
    }
}

/// Reject text the fixed-width slot cannot carry back unchanged:
/// longer than the width in UTF-8 bytes, or ending in NUL.
pub(crate) fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ProtocolError> {
    let len = value.len();
    if len > max {
        return Err(ProtocolError::OversizeField { field, len, max });
    }
    if value.ends_with('\0') {
        return Err(ProtocolError::TrailingNul { field });
    }
    Ok(())
}
