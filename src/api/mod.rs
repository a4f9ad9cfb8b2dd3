//! Request-executor seam shared by every endpoint group of the view API.
//!
//! This module separates describing a call (path, method, body, headers,
//! response expectations) from performing it. Endpoint clients build an
//! [`ApiRequest`] and hand it to a [`RequestExecutor`]; the executor owns
//! transport, authentication, and status interpretation.
//!
//! # Architecture
//!
//! - [`RequestExecutor`] - Async trait that request executors implement
//! - [`ApiRequest`] - Description of a single call against the API
//! - [`ResponseBody`] - Decoded payload returned by an executor
//! - [`HttpExecutor`] - Production executor over HTTPS with token auth
//! - [`ServiceError`] - Error surface shared by every operation
//!
//! # Example
//!
//! ```no_run
//! use docview_client::api::{ApiRequest, HttpExecutor, RequestExecutor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = HttpExecutor::new("api-token")?;
//! let request = ApiRequest::get("/documents/abc123/thumbnail?width=128&height=128");
//! let payload = executor.execute(&request).await?.into_bytes();
//! println!("received {} bytes", payload.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod http;

pub use error::ServiceError;
pub use http::{CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, HttpExecutor, READ_TIMEOUT_SECS};

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;

/// HTTP method of an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET request.
    Get,
    /// POST request.
    Post,
    /// PUT request.
    Put,
    /// DELETE request.
    Delete,
}

impl Method {
    /// Returns the canonical wire name of the method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected format of a binary response payload.
///
/// Executors use the hint to advertise the acceptable content type; it never
/// changes how the payload is returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingHint {
    /// A PDF document.
    Pdf,
    /// A zip archive.
    Zip,
}

impl EncodingHint {
    /// Returns the MIME type sent in the `Accept` header for this hint.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Zip => "application/zip",
        }
    }
}

/// Description of a single call against the view API.
///
/// The path is relative to the executor's base URL and carries its own query
/// string; the executor appends nothing beyond authentication headers.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Request path including any query string (e.g. `/documents/abc/content.zip`).
    pub path: String,
    /// HTTP method.
    pub method: Method,
    /// Optional request body.
    pub body: Option<Vec<u8>>,
    /// Optional additional headers (name to value).
    pub headers: Option<HashMap<String, String>>,
    /// Whether the response body should be decoded as text rather than
    /// returned as raw bytes.
    pub expect_text: bool,
    /// Expected binary payload format, when the caller knows it.
    pub encoding: Option<EncodingHint>,
}

impl ApiRequest {
    /// Creates a GET request for `path` expecting a raw binary response.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            body: None,
            headers: None,
            expect_text: false,
            encoding: None,
        }
    }

    /// Sets the expected binary payload format.
    #[must_use]
    pub fn with_encoding(mut self, encoding: EncodingHint) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Adds a header to the request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Requests text decoding of the response body.
    #[must_use]
    pub fn expecting_text(mut self) -> Self {
        self.expect_text = true;
        self
    }
}

/// Decoded response payload returned by a [`RequestExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Raw bytes (archives, PDFs, thumbnails).
    Binary(Vec<u8>),
    /// Text decoded according to the response charset.
    Text(String),
}

impl ResponseBody {
    /// Consumes the payload and returns its bytes.
    ///
    /// Text payloads decay to their UTF-8 bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Binary(bytes) => bytes,
            Self::Text(text) => text.into_bytes(),
        }
    }

    /// Consumes the payload and returns the decoded text, or `None` for
    /// binary payloads.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Binary(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

/// Trait that request executors implement.
///
/// Endpoint clients describe each call as an [`ApiRequest`] and delegate the
/// rest to an executor: building the full URL, attaching credentials, and
/// mapping transport failures and error statuses to [`ServiceError`].
/// [`HttpExecutor`] is the production implementation; tests substitute
/// recording doubles.
///
/// # Object Safety
///
/// This trait uses `async_trait` to support dynamic dispatch via
/// `Arc<dyn RequestExecutor>` shared across endpoint clients. Rust 2024
/// native async traits are not object-safe, so `async_trait` is required
/// for that sharing pattern.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Performs the request and returns the decoded response payload.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] for transport failures and for any error
    /// status reported by the service. Executors surface failures as
    /// observed; they do not retry or reinterpret them.
    async fn execute(&self, request: &ApiRequest) -> Result<ResponseBody, ServiceError>;
}
