//! netec-core
//!
//! Wire codec for the fixed-width read request used by erasure-coding
//! reconstruction workers to fetch a byte range of a remote block replica.
//! No sockets, no async runtime.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod primitives;
pub mod request;
pub mod telemetry;

// Stream adapters
pub mod io;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::PROTO_LEN;
    pub use crate::io::{read_request, write_request, RequestReader, RequestWriter};
    pub use crate::request::{decode_request, encode_request, ExtendedBlock, ReadRequest};
    pub use crate::types::{ProtocolError, TransportError};
}
