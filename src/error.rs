//! Crate-level error types.
//!
//! [`VantageError`] unifies every error source (configuration, HTTP
//! transport, provider responses) behind a single enum so callers can
//! match on the variant they care about while still using the `?`
//! operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VantageError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum VantageError {
    /// Configuration was missing or invalid at load time.
    #[error("configuration error: {0}")]
    Config(String),

    /// A provider answered with a non-success HTTP status.
    ///
    /// Never retried here; callers own any retry/backoff policy.
    #[error("upstream returned {status} for {url}")]
    Upstream {
        status: reqwest::StatusCode,
        url: String,
    },

    /// A provider response decoded as JSON but did not have the
    /// expected shape (missing field, wrong type, malformed row).
    #[error("malformed provider response: {0}")]
    Parse(String),

    /// A provider returned zero rows for a requested range.
    #[error("empty result: {0}")]
    EmptyResult(String),

    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
