//! Error types for the Battle.net API client

use reqwest::StatusCode;
use thiserror::Error;

/// Error types for gateway operations
#[derive(Debug, Error)]
pub enum Error {
    /// No active session; `authenticate` must succeed before requests are built
    #[error("not authenticated: call authenticate() before issuing requests")]
    NotAuthenticated,

    /// The token endpoint rejected the credentials
    #[error("authentication failed with status {status}")]
    AuthenticationFailed {
        /// HTTP status returned by the token endpoint
        status: StatusCode,
    },

    /// The API returned 429 on the retried attempt as well
    #[error("rate limited: request rejected with 429 after retry")]
    RateLimited,

    /// The API returned a non-success status other than a retryable 429
    #[error("request failed with status {0}")]
    HttpStatus(StatusCode),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expected
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A request URL could not be constructed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Unknown region identifier
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Unknown locale identifier
    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, Error>;
