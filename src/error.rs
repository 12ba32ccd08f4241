//! Error types for the Taquilla API client.
//!
//! All errors implement the standard [`std::error::Error`] trait via
//! [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **HTTP errors** ([`ApiError::Http`]): the backend answered with a
//!   non-2xx status; the variant carries the status code and whatever JSON
//!   body the server returned
//! - **Network errors** ([`ApiError::Network`]): the request itself failed
//!   (connectivity, DNS, TLS, timeout)
//! - **Serialization errors** ([`ApiError::Serialization`]): a request
//!   payload could not be encoded as JSON
//! - **Configuration errors** ([`ApiError::Config`]): invalid client
//!   configuration rejected before any request is made

use thiserror::Error;

/// Result type alias for client operations.
///
/// This is a convenience type that uses [`ApiError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the ticketing backend.
///
/// HTTP-level failures are normalized into the single [`Http`](Self::Http)
/// variant carrying exactly the status code and the parsed error body, so
/// callers match on one shape regardless of which endpoint failed.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend returned a non-2xx status.
    ///
    /// `body` holds the parsed JSON error payload when the server sent one,
    /// or `None` when the response body was empty or not valid JSON.
    #[error("API error {status}")]
    Http {
        /// HTTP status code as received.
        status: u16,
        /// Parsed JSON error body, if any.
        body: Option<serde_json::Value>,
    },

    /// The HTTP call itself failed before a status code was available.
    ///
    /// Wraps [`reqwest::Error`]: connection refused, DNS failures, TLS
    /// errors, timeouts. Surfaced to the caller unmodified.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request payload could not be serialized to JSON.
    #[error("request serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Client configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns the HTTP status code for [`Http`](Self::Http) errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the parsed error body for [`Http`](Self::Http) errors.
    #[must_use]
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// True when this is an HTTP 404. The purchase-history fallback scan
    /// uses this to distinguish "route absent on this deployment" from real
    /// backend failures.
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
