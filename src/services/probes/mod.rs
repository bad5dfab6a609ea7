//! Connectivity probes for the backing stores.
//!
//! Each probe performs one round trip against its service and reports the
//! outcome as a [`ProbeResult`]. Failures are folded into the result, never
//! returned as errors: the endpoints that render probe output always answer
//! 200 and let the body carry the bad news.
pub mod cache;
pub mod database;

use serde::Serialize;

/// Outcome of a single probe call.
///
/// Serializes to `{"status": "success" | "error", "message": "..."}`, which
/// is the wire shape of `/api/test-cache` and of each entry under
/// `/api/status`'s `services` object.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeResult {
    Success { message: String },
    Error { message: String },
}

impl ProbeResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
