//! telemetry/counters.rs
//! Mutable counters kept by one stream adapter.
//!
//! Counters are owned by the adapter that updates them; nothing here is
//! global. Convert into an immutable `TransferSnapshot` when reporting.

use std::ops::AddAssign;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct TransferCounters {
    pub requests_encoded: u64,
    pub requests_decoded: u64,
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub oversize_rejections: u64,
    pub decode_failures: u64,
}

impl TransferCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one request written to the transport.
    pub fn record_encoded(&mut self, wire_len: usize) {
        self.requests_encoded += 1;
        self.bytes_written += wire_len as u64;
    }

    /// Record one request decoded from the transport.
    pub fn record_decoded(&mut self) {
        self.requests_decoded += 1;
    }

    /// Raw bytes pulled from the transport, valid or not.
    pub fn record_read(&mut self, n: usize) {
        self.bytes_read += n as u64;
    }

    pub fn record_oversize(&mut self) {
        self.oversize_rejections += 1;
    }

    pub fn record_decode_failure(&mut self) {
        self.decode_failures += 1;
    }

    pub fn failures(&self) -> u64 {
        self.oversize_rejections + self.decode_failures
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl AddAssign for TransferCounters {
    fn add_assign(&mut self, other: Self) {
        self.requests_encoded += other.requests_encoded;
        self.requests_decoded += other.requests_decoded;
        self.bytes_written += other.bytes_written;
        self.bytes_read += other.bytes_read;
        self.oversize_rejections += other.oversize_rejections;
        self.decode_failures += other.decode_failures;
    }
}
