//! Download operations for stored documents.
//!
//! This module covers the download endpoint group of the view API: fetching
//! a stored document as its original-file archive or as a PDF rendition, and
//! fetching thumbnails at a requested size. Payloads are returned as raw
//! bytes; nothing is written to disk.
//!
//! # Architecture
//!
//! - [`DownloadClient`] - Issues download requests through a [`RequestExecutor`](crate::api::RequestExecutor)
//! - [`Rendition`] - Downloadable form of a stored document
//! - [`DownloadOptions`] - Per-request options for document downloads
//! - [`AnnotationFilter`] - Annotation selection carried by [`DownloadOptions`]
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use docview_client::api::HttpExecutor;
//! use docview_client::download::DownloadClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let executor = Arc::new(HttpExecutor::new("api-token")?);
//! let client = DownloadClient::new(executor);
//! let archive = client.fetch_document("f2d5a53cf2034e2c9fd2a2cbee26ba16").await?;
//! println!("downloaded {} bytes", archive.len());
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::DownloadClient;

use std::fmt;

use crate::api::EncodingHint;

/// Default path prefix prepended to every generated request path.
pub const DEFAULT_PATH_PREFIX: &str = "/documents";

/// Smallest thumbnail width the service accepts, in pixels.
pub const THUMBNAIL_MIN_WIDTH: u32 = 16;

/// Largest thumbnail width the service accepts, in pixels.
pub const THUMBNAIL_MAX_WIDTH: u32 = 1024;

/// Smallest thumbnail height the service accepts, in pixels.
pub const THUMBNAIL_MIN_HEIGHT: u32 = 16;

/// Largest thumbnail height the service accepts, in pixels.
pub const THUMBNAIL_MAX_HEIGHT: u32 = 768;

/// Downloadable form of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rendition {
    /// The originally uploaded file, packaged as a zip archive.
    #[default]
    OriginalArchive,
    /// The PDF conversion of the document.
    Pdf,
}

impl Rendition {
    /// Returns the file extension used in the content request path.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::OriginalArchive => "zip",
            Self::Pdf => "pdf",
        }
    }

    /// Returns the encoding hint handed to the request executor.
    #[must_use]
    pub fn encoding_hint(self) -> EncodingHint {
        match self {
            Self::OriginalArchive => EncodingHint::Zip,
            Self::Pdf => EncodingHint::Pdf,
        }
    }
}

/// Selects which annotation layers a document download should include.
///
/// The wire form is a single token (for example `all`) or a comma-joined
/// list of user ids, matching the sibling storage API this option set was
/// modeled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationFilter {
    /// A single filter token.
    Token(String),
    /// An ordered list of user ids whose annotations to include.
    Users(Vec<String>),
}

impl fmt::Display for AnnotationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => f.write_str(token),
            Self::Users(users) => f.write_str(&users.join(",")),
        }
    }
}

/// Options for [`DownloadClient::fetch_document_with_options`].
///
/// The annotation fields are accepted for call-site parity with the sibling
/// storage API but are not applied to the generated request; see the field
/// docs.
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    /// Which rendition to download.
    pub rendition: Rendition,
    /// Whether to include annotations. Currently not applied to the request.
    pub include_annotations: bool,
    /// Which annotations to include. Currently not applied to the request.
    pub annotation_filter: Option<AnnotationFilter>,
}

impl DownloadOptions {
    /// Creates options selecting the original-file archive.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options selecting the PDF rendition.
    #[must_use]
    pub fn pdf() -> Self {
        Self {
            rendition: Rendition::Pdf,
            ..Self::default()
        }
    }

    /// Sets the rendition to download.
    #[must_use]
    pub fn rendition(mut self, rendition: Rendition) -> Self {
        self.rendition = rendition;
        self
    }

    /// Requests annotation layers in the rendition.
    #[must_use]
    pub fn include_annotations(mut self, include: bool) -> Self {
        self.include_annotations = include;
        self
    }

    /// Restricts which annotations to include.
    #[must_use]
    pub fn annotation_filter(mut self, filter: AnnotationFilter) -> Self {
        self.annotation_filter = Some(filter);
        self
    }
}
