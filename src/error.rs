//! Wordweave error types

use std::time::Duration;

/// Wordweave error types
#[derive(Debug, thiserror::Error)]
pub enum WordweaveError {
    // Model provider errors
    #[error("model throttled, retry after {retry_after:?}")]
    Throttled { retry_after: Option<Duration> },

    #[error("invalid model request: {0}")]
    InvalidRequest(String),

    #[error("access denied by model provider")]
    AccessDenied,

    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("empty response from model")]
    EmptyResponse,

    #[error("unknown model error: {0}")]
    Unknown(String),

    // Data errors
    /// The model answered, but not in the expected shape.
    #[error("parse failure: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Cache store errors
    #[error("cache error: {0}")]
    Cache(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl WordweaveError {
    /// Whether this error is worth retrying.
    ///
    /// Throttling, network failures, 5xx (and 529 overload) responses and
    /// unclassified failures are transient. Rejected requests, denied access
    /// and local errors are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            WordweaveError::Throttled { .. }
            | WordweaveError::Network(_)
            | WordweaveError::EmptyResponse
            | WordweaveError::Unknown(_) => true,
            WordweaveError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Provider-supplied backoff hint, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            WordweaveError::Throttled { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for WordweaveError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() || err.is_request() {
            WordweaveError::Network(err.to_string())
        } else if err.is_decode() {
            WordweaveError::Parse(err.to_string())
        } else {
            WordweaveError::Unknown(err.to_string())
        }
    }
}

/// Result type alias for Wordweave operations
pub type Result<T> = std::result::Result<T, WordweaveError>;
