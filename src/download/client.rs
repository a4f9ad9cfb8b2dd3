//! Client for the download endpoint group.
//!
//! This module provides the `DownloadClient` struct, which turns the logical
//! download operations (document rendition, extracted text, thumbnail) into
//! request paths and delegates execution to a
//! [`RequestExecutor`](crate::api::RequestExecutor).

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::api::{ApiRequest, RequestExecutor, ServiceError};

use super::{DEFAULT_PATH_PREFIX, DownloadOptions};

/// Client for downloading stored documents from the view API.
///
/// The client holds no connection state of its own; it builds request paths
/// under a configurable prefix and hands them to its executor. Each
/// operation issues exactly one request, except
/// [`fetch_extracted_text`](Self::fetch_extracted_text), which issues none.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use docview_client::api::HttpExecutor;
/// use docview_client::download::{DownloadClient, DownloadOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let executor = Arc::new(HttpExecutor::new("api-token")?);
/// let client = DownloadClient::new(executor);
/// let pdf = client
///     .fetch_document_with_options("f2d5a53cf2034e2c9fd2a2cbee26ba16", &DownloadOptions::pdf())
///     .await?;
/// println!("downloaded {} bytes", pdf.len());
/// # Ok(())
/// # }
/// ```
pub struct DownloadClient {
    executor: Arc<dyn RequestExecutor>,
    path_prefix: String,
}

impl DownloadClient {
    /// Creates a client with the default `/documents` path prefix.
    #[must_use]
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self::with_path_prefix(executor, DEFAULT_PATH_PREFIX)
    }

    /// Creates a client with a custom path prefix.
    ///
    /// The prefix is used verbatim, so callers supply a well-formed path
    /// segment with a leading slash, such as `/documents`.
    #[must_use]
    pub fn with_path_prefix(
        executor: Arc<dyn RequestExecutor>,
        path_prefix: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            path_prefix: path_prefix.into(),
        }
    }

    /// Returns the path prefix currently prepended to request paths.
    #[must_use]
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Replaces the path prefix used by subsequent requests.
    ///
    /// The value is not validated. Reconfiguration needs exclusive access,
    /// so a client shared behind `Arc` must be configured before sharing.
    pub fn set_path_prefix(&mut self, path_prefix: impl Into<String>) {
        self.path_prefix = path_prefix.into();
    }

    /// Downloads the original file of a stored document as a zip archive.
    ///
    /// Equivalent to
    /// [`fetch_document_with_options`](Self::fetch_document_with_options)
    /// with default options.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`ServiceError`] unchanged: network
    /// failures, timeouts, and error statuses for unknown identifiers or
    /// rejected tokens.
    #[instrument(skip(self))]
    pub async fn fetch_document(&self, id: &str) -> Result<Vec<u8>, ServiceError> {
        self.fetch_document_with_options(id, &DownloadOptions::default())
            .await
    }

    /// Downloads a rendition of a stored document.
    ///
    /// `id` is the identifier the service returned when the document was
    /// uploaded. It is not validated locally; unknown or malformed
    /// identifiers come back as error statuses from the service.
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`ServiceError`] unchanged.
    #[instrument(skip(self, options), fields(rendition = ?options.rendition))]
    pub async fn fetch_document_with_options(
        &self,
        id: &str,
        options: &DownloadOptions,
    ) -> Result<Vec<u8>, ServiceError> {
        // TODO: forward include_annotations/annotation_filter once the view
        // service honors them on this endpoint. They are accepted today for
        // call-site parity with the storage API but do not reach the wire.
        let rendition = options.rendition;
        let request_path = format!(
            "{}/{}/content.{}",
            self.path_prefix,
            id,
            rendition.extension()
        );
        debug!(path = %request_path, "requesting document rendition");

        let request = ApiRequest::get(request_path).with_encoding(rendition.encoding_hint());
        let payload = self.executor.execute(&request).await?.into_bytes();
        debug!(bytes = payload.len(), "document rendition received");
        Ok(payload)
    }

    /// Downloads the text extracted from a stored document.
    ///
    /// The view service does not implement text extraction, so this
    /// operation always fails with [`ServiceError::NotSupported`] and never
    /// issues a request. It exists so callers written against the wider
    /// download-operation family fail fast instead of silently getting
    /// nothing.
    ///
    /// # Errors
    ///
    /// Always returns [`ServiceError::NotSupported`].
    #[instrument(skip(self))]
    pub async fn fetch_extracted_text(&self, id: &str) -> Result<String, ServiceError> {
        debug!(%id, "extracted text requested for unsupported operation");
        Err(ServiceError::not_supported("extracted-text download"))
    }

    /// Downloads a thumbnail of a stored document at the requested size.
    ///
    /// The service accepts widths from [`THUMBNAIL_MIN_WIDTH`] to
    /// [`THUMBNAIL_MAX_WIDTH`] pixels and heights from
    /// [`THUMBNAIL_MIN_HEIGHT`] to [`THUMBNAIL_MAX_HEIGHT`] pixels. The
    /// client does not clamp or validate the dimensions; values outside the
    /// range are judged by the service. The payload is whatever image format
    /// the service produces.
    ///
    /// [`THUMBNAIL_MIN_WIDTH`]: super::THUMBNAIL_MIN_WIDTH
    /// [`THUMBNAIL_MAX_WIDTH`]: super::THUMBNAIL_MAX_WIDTH
    /// [`THUMBNAIL_MIN_HEIGHT`]: super::THUMBNAIL_MIN_HEIGHT
    /// [`THUMBNAIL_MAX_HEIGHT`]: super::THUMBNAIL_MAX_HEIGHT
    ///
    /// # Errors
    ///
    /// Propagates the executor's [`ServiceError`] unchanged.
    #[instrument(skip(self))]
    pub async fn fetch_thumbnail(
        &self,
        id: &str,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, ServiceError> {
        let request_path = format!(
            "{}/{}/thumbnail?width={}&height={}",
            self.path_prefix, id, width, height
        );
        debug!(path = %request_path, "requesting thumbnail");

        let request = ApiRequest::get(request_path);
        let payload = self.executor.execute(&request).await?.into_bytes();
        debug!(bytes = payload.len(), "thumbnail received");
        Ok(payload)
    }
}

impl std::fmt::Debug for DownloadClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DownloadClient")
            .field("path_prefix", &self.path_prefix)
            .finish_non_exhaustive()
    }
}
