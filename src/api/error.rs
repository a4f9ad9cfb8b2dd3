//! Error types for view-API calls.
//!
//! This module defines structured errors for every operation the client
//! exposes. One enum covers both sources of failure callers can see:
//! errors reported by the request executor (transport, timeouts, error
//! statuses) and errors raised locally before any request is issued.

use thiserror::Error;

/// Errors that can occur during view-API operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error requesting {path}: {source}")]
    Network {
        /// The request path that failed.
        path: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before a response arrived.
    #[error("timeout requesting {path}")]
    Timeout {
        /// The request path that timed out.
        path: String,
    },

    /// The service answered with an error status (4xx client errors,
    /// 5xx server errors). Unknown identifiers, rejected parameters, and
    /// expired tokens all surface here, exactly as the service reported them.
    #[error("service returned HTTP {status} for {path}")]
    Status {
        /// The request path that was rejected.
        path: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The joined base URL and request path do not form a valid URL.
    #[error("invalid request URL: {url}")]
    InvalidUrl {
        /// The malformed URL string.
        url: String,
    },

    /// The executor could not be constructed (unusable token material,
    /// HTTP client build failure).
    #[error("executor configuration error: {detail}")]
    Configuration {
        /// What was wrong with the configuration.
        detail: String,
    },

    /// The operation belongs to the wider download-API family but the
    /// backing service does not implement it. Raised locally, before any
    /// request is issued.
    #[error("{operation} is not supported by the view service")]
    NotSupported {
        /// The operation that is unavailable.
        operation: String,
    },
}

impl ServiceError {
    /// Creates a network error from a reqwest error.
    #[must_use]
    pub fn network(path: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            path: path.into(),
            source,
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(path: impl Into<String>) -> Self {
        Self::Timeout { path: path.into() }
    }

    /// Creates an error-status error.
    #[must_use]
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    /// Creates an invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(detail: impl Into<String>) -> Self {
        Self::Configuration {
            detail: detail.into(),
        }
    }

    /// Creates a not-supported error for the named operation.
    #[must_use]
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
        }
    }
}

// Note on From trait implementations:
// We intentionally do NOT implement `From<reqwest::Error>` because the
// Network and Timeout variants require the request path for context, which
// the source error does not carry. The helper constructors (network(),
// timeout(), etc.) are the correct pattern here as they force callers to
// provide that context.
