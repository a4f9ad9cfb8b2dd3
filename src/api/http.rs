//! HTTP request executor for the view API.
//!
//! This module provides the [`HttpExecutor`] struct, the production
//! [`RequestExecutor`](super::RequestExecutor) implementation. It centralizes
//! transport policy: base URL and token configuration, timeouts, the shared
//! user agent, and mapping of transport failures and error statuses to
//! [`ServiceError`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use tracing::{debug, instrument};
use url::Url;

use super::error::ServiceError;
use super::{ApiRequest, Method, RequestExecutor, ResponseBody};

/// Base URL of the hosted view API.
pub const DEFAULT_BASE_URL: &str = "https://view-api.docview.com/1";

/// Default connect timeout in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default read timeout in seconds. Generous because original-file archives
/// can run to hundreds of megabytes.
pub const READ_TIMEOUT_SECS: u64 = 120;

/// Executes view-API requests over HTTPS with token authentication.
///
/// The executor is designed to be created once and shared behind
/// `Arc<dyn RequestExecutor>`, taking advantage of connection pooling.
/// Every request carries an `Authorization: Token <api-token>` header; an
/// `Accept` header is added when the request declares an encoding hint.
///
/// # Example
///
/// ```no_run
/// use docview_client::api::HttpExecutor;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = HttpExecutor::new("api-token")?;
/// # let _ = executor;
/// # Ok(())
/// # }
/// ```
pub struct HttpExecutor {
    client: Client,
    base_url: String,
    api_token: String,
}

impl HttpExecutor {
    /// Creates an executor for the hosted view API with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if the token contains control
    /// characters or HTTP client construction fails.
    #[instrument(skip_all)]
    pub fn new(api_token: impl Into<String>) -> Result<Self, ServiceError> {
        Self::build(
            api_token.into(),
            DEFAULT_BASE_URL.to_string(),
            CONNECT_TIMEOUT_SECS,
            READ_TIMEOUT_SECS,
        )
    }

    /// Creates an executor with a custom base URL (self-hosted deployments,
    /// wiremock tests).
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if the token contains control
    /// characters or HTTP client construction fails.
    #[instrument(skip_all, fields(base_url))]
    pub fn with_base_url(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ServiceError> {
        Self::build(
            api_token.into(),
            base_url.into(),
            CONNECT_TIMEOUT_SECS,
            READ_TIMEOUT_SECS,
        )
    }

    /// Creates an executor with a custom base URL and explicit timeout values.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Configuration`] if the token contains control
    /// characters or HTTP client construction fails.
    #[instrument(skip_all, fields(base_url, connect_timeout_secs, read_timeout_secs))]
    pub fn with_base_url_and_timeouts(
        api_token: impl Into<String>,
        base_url: impl Into<String>,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, ServiceError> {
        Self::build(
            api_token.into(),
            base_url.into(),
            connect_timeout_secs,
            read_timeout_secs,
        )
    }

    fn build(
        api_token: String,
        base_url: String,
        connect_timeout_secs: u64,
        read_timeout_secs: u64,
    ) -> Result<Self, ServiceError> {
        if api_token.chars().any(|c| c == '\n' || c == '\r' || c == '\0') {
            return Err(ServiceError::configuration(
                "api token contains control characters",
            ));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .user_agent(default_user_agent())
            .build()
            .map_err(|e| ServiceError::configuration(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            // Joined with paths that carry their own leading slash.
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: &ApiRequest) -> Result<ResponseBody, ServiceError> {
        let joined = format!("{}{}", self.base_url, request.path);
        let url = Url::parse(&joined).map_err(|_| ServiceError::invalid_url(&joined))?;

        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        builder = builder.header(AUTHORIZATION, format!("Token {}", self.api_token));
        if let Some(encoding) = request.encoding {
            builder = builder.header(ACCEPT, encoding.mime_type());
        }
        if let Some(headers) = &request.headers {
            for (name, value) in headers {
                builder = builder.header(name.as_str(), value.as_str());
            }
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!("issuing view-API request");
        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(&request.path, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "view API returned error status");
            return Err(ServiceError::status(&request.path, status.as_u16()));
        }

        if request.expect_text {
            let text = response
                .text()
                .await
                .map_err(|e| transport_error(&request.path, e))?;
            debug!(bytes = text.len(), "decoded text response");
            Ok(ResponseBody::Text(text))
        } else {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| transport_error(&request.path, e))?;
            debug!(bytes = bytes.len(), "received binary response");
            Ok(ResponseBody::Binary(bytes.to_vec()))
        }
    }
}

/// Maps a reqwest failure to the matching [`ServiceError`] variant.
fn transport_error(path: &str, source: reqwest::Error) -> ServiceError {
    if source.is_timeout() {
        ServiceError::timeout(path)
    } else {
        ServiceError::network(path, source)
    }
}

/// User agent identifying this client, shared by every request.
fn default_user_agent() -> String {
    format!("docview-client/{}", env!("CARGO_PKG_VERSION"))
}
