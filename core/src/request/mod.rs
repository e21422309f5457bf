//! request/mod.rs
//! Read request sent by EC reconstruction workers to a remote storage node.
//!
//! Notes:
//! - Fixed-size record (90 bytes), no length prefix, no checksum.
//! - Big-endian integers, zero-padded UTF-8 text.
//! - Layout is wire version 1; see `constants::WIRE_VERSION`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
