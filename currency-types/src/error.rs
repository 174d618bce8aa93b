//! Error types for the currency service.

use std::time::Duration;

/// Message returned to callers whenever the upstream provider cannot serve a request.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch data from the Frankfurter API.";

/// Rate provider errors (outbound call failures, after retries).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No response within {0:?}")]
    Timeout(Duration),
}

impl ProviderError {
    /// Whether the upstream answered 404 Not Found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Status { status: 404, .. })
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. The upstream failure carries no detail;
/// the underlying `ProviderError` is logged where it is converted.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Failed to fetch data from the Frankfurter API.")]
    UpstreamFailure,
}
