//! Errors returned by `TodoClient`.
//!
//! `NotFound` is split out because callers routinely branch on it; every
//! other unexpected status lands in `Http` with the raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// 404 from the service. `detail` is the server's message, normally
    /// "Todo not found".
    #[error("not found: {detail}")]
    NotFound { detail: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
