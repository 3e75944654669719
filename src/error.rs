//! Crate-level error types.
//!
//! [`ToshiError`] unifies every error source (configuration, transport,
//! JSON decoding) behind a single enum so callers can match on the
//! variant they care about while still using the `?` operator for easy
//! propagation.

use crate::transport::TransportError;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ToshiError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum ToshiError {
    /// Configuration was missing or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP round trip could not be completed. Carries the
    /// transport error unchanged; nothing is retried at this layer.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A response body was not valid JSON or did not match the shape
    /// the endpoint is declared to return.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
