//! DocView API Client Library
//!
//! This library provides a typed client for the DocView view API, which
//! converts uploaded documents into web-viewable renditions. The crate
//! currently covers the download endpoint group: original-file archives,
//! PDF renditions, and thumbnails of stored documents.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - Request-executor seam, HTTP transport, and error types
//! - [`download`] - Download operations for stored documents
//!
//! Future modules will include:
//! - `documents` - Document metadata and upload endpoints
//! - `sessions` - Viewing session creation

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod download;
#[cfg(test)]
pub mod test_support;

// Re-export commonly used types
pub use api::{
    ApiRequest, DEFAULT_BASE_URL, EncodingHint, HttpExecutor, Method, RequestExecutor,
    ResponseBody, ServiceError,
};
pub use download::{
    AnnotationFilter, DEFAULT_PATH_PREFIX, DownloadClient, DownloadOptions, Rendition,
    THUMBNAIL_MAX_HEIGHT, THUMBNAIL_MAX_WIDTH, THUMBNAIL_MIN_HEIGHT, THUMBNAIL_MIN_WIDTH,
};
