//! io.rs
//! Blocking stream adapters around the request codec.
//!
//! The codec never touches a transport. These helpers write the 90-byte
//! record with `write_all` and read it back until the record is complete or
//! the stream ends, so short reads are classified instead of ignored.

use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::constants::PROTO_LEN;
use crate::request::{decode_request, encode_request, ReadRequest};
use crate::telemetry::{TransferCounters, TransferSnapshot};
use crate::types::{ProtocolError, TransportError};

// ================= Free functions =================

pub fn write_request<W: Write>(w: &mut W, r: &ReadRequest) -> Result<(), TransportError> {
    let buf = encode_request(r)?;
    w.write_all(&buf)?;
    trace!(request = %r.summary(), "read request written");
    Ok(())
}

/// Read one request.
///
/// Returns `TransportError::Closed` when the stream is already at EOF and
/// `ProtocolError::ShortRead` when it ends partway through the record.
pub fn read_request<R: Read>(r: &mut R) -> Result<ReadRequest, TransportError> {
    receive(r).1
}

/// Read up to `buf.len()` bytes, stopping early only at EOF.
/// On error the bytes already taken off the stream are reported with it.
fn fill<R: Read>(r: &mut R, buf: &mut [u8]) -> Result<usize, (usize, io::Error)> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err((filled, e)),
        }
    }
    Ok(filled)
}

/// Pull one record off the stream; also reports how many bytes were consumed.
fn receive<R: Read>(r: &mut R) -> (usize, Result<ReadRequest, TransportError>) {
    let mut buf = [0u8; PROTO_LEN];
    let filled = match fill(r, &mut buf) {
        Ok(n) => n,
        Err((n, e)) => return (n, Err(e.into())),
    };
    if filled == 0 {
        return (0, Err(TransportError::Closed));
    }

    let result = decode_request(&buf[..filled]).map_err(|e| {
        debug!(bytes = filled, error = %e, "rejected read request");
        TransportError::from(e)
    });
    if let Ok(req) = &result {
        trace!(request = %req.summary(), "read request received");
    }
    (filled, result)
}

// ================= Counting adapters =================

#[derive(Debug)]
pub struct RequestWriter<W: Write> {
    inner: W,
    counters: TransferCounters,
}

impl<W: Write> RequestWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { inner: writer, counters: TransferCounters::default() }
    }

    pub fn send(&mut self, r: &ReadRequest) -> Result<(), TransportError> {
        let buf = match encode_request(r) {
            Ok(buf) => buf,
            Err(e) => {
                if matches!(e, ProtocolError::OversizeField { .. }) {
                    self.counters.record_oversize();
                }
                debug!(error = %e, "refusing to send read request");
                return Err(e.into());
            }
        };
        self.inner.write_all(&buf)?;
        self.counters.record_encoded(buf.len());
        trace!(request = %r.summary(), "read request written");
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), TransportError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> TransferSnapshot {
        TransferSnapshot::from(&self.counters)
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads consecutive requests from one stream.
///
/// Iterating stops cleanly at EOF between records; a record cut short
/// yields a `ShortRead` error.
#[derive(Debug)]
pub struct RequestReader<R: Read> {
    inner: R,
    counters: TransferCounters,
}

impl<R: Read> RequestReader<R> {
    pub fn new(reader: R) -> Self {
        Self { inner: reader, counters: TransferCounters::default() }
    }

    pub fn recv(&mut self) -> Result<ReadRequest, TransportError> {
        let (n, result) = receive(&mut self.inner);
        self.counters.record_read(n);
        match &result {
            Ok(_) => self.counters.record_decoded(),
            Err(TransportError::Protocol(_)) => self.counters.record_decode_failure(),
            Err(_) => {}
        }
        result
    }

    pub fn counters(&self) -> &TransferCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> TransferSnapshot {
        TransferSnapshot::from(&self.counters)
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Iterator for RequestReader<R> {
    type Item = Result<ReadRequest, TransportError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.recv() {
            Err(TransportError::Closed) => None,
            other => Some(other),
        }
    }
}
