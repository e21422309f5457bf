use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TransferCounters;

/// Immutable copy of adapter counters plus derived ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSnapshot {
    pub requests_encoded: u64,
    pub requests_decoded: u64,
    pub bytes_written: u64,
    pub bytes_read: u64,
    pub oversize_rejections: u64,
    pub decode_failures: u64,
    /// Failed operations over all attempted operations, 0.0 when idle.
    pub failure_ratio: f64,
}

impl TransferSnapshot {
    pub fn from(counters: &TransferCounters) -> Self {
        let failures = counters.failures();
        let attempts = counters.requests_encoded + counters.requests_decoded + failures;
        let failure_ratio = if attempts > 0 {
            failures as f64 / attempts as f64
        } else {
            0.0
        };

        Self {
            requests_encoded: counters.requests_encoded,
            requests_decoded: counters.requests_decoded,
            bytes_written: counters.bytes_written,
            bytes_read: counters.bytes_read,
            oversize_rejections: counters.oversize_rejections,
            decode_failures: counters.decode_failures,
            failure_ratio,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
