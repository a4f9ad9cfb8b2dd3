//! Integration tests for the download endpoint group.
//!
//! These tests exercise the public surface end to end: a `DownloadClient`
//! over a real `HttpExecutor` against mock HTTP servers.

use std::sync::Arc;

use docview_client::api::{HttpExecutor, ServiceError};
use docview_client::download::{DownloadClient, DownloadOptions};
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "integration-test-token";

/// Helper to create a client wired to the given mock server.
fn client_for(server: &MockServer) -> DownloadClient {
    let executor = HttpExecutor::with_base_url(TEST_TOKEN, server.uri())
        .expect("executor construction should succeed");
    DownloadClient::new(Arc::new(executor))
}

#[tokio::test]
async fn test_fetch_document_round_trips_archive_bytes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc123/content.zip"))
        .and(header("authorization", format!("Token {TEST_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04archive-content"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = client
        .fetch_document("abc123")
        .await
        .expect("download should succeed");

    assert_eq!(payload, b"PK\x03\x04archive-content");
}

#[tokio::test]
async fn test_fetch_document_pdf_requests_pdf_rendition() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc123/content.pdf"))
        .and(header("accept", "application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7 content"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = client
        .fetch_document_with_options("abc123", &DownloadOptions::pdf())
        .await
        .expect("PDF download should succeed");

    assert_eq!(payload, b"%PDF-1.7 content");
}

#[tokio::test]
async fn test_fetch_thumbnail_sends_requested_dimensions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/abc123/thumbnail"))
        .and(query_param("width", "200"))
        .and(query_param("height", "150"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"\x89PNG\r\n\x1a\n"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let payload = client
        .fetch_thumbnail("abc123", 200, 150)
        .await
        .expect("thumbnail download should succeed");

    assert_eq!(payload, b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn test_fetch_document_unknown_identifier_surfaces_service_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/missing/content.zip"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_document("missing").await;

    match result {
        Err(ServiceError::Status { path, status }) => {
            assert_eq!(status, 404);
            assert!(
                path.contains("/documents/missing/content.zip"),
                "Expected request path in error, got: {path}"
            );
        }
        other => panic!("Expected Status(404), got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_extracted_text_never_contacts_the_service() {
    let mock_server = MockServer::start().await;

    // Any request reaching the server fails the expectation check on drop.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.fetch_extracted_text("abc123").await;

    assert!(
        matches!(result, Err(ServiceError::NotSupported { .. })),
        "Expected NotSupported, got: {result:?}"
    );
}

#[tokio::test]
async fn test_custom_path_prefix_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/v2/abc123/content.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"relocated"))
        .mount(&mock_server)
        .await;

    let executor = HttpExecutor::with_base_url(TEST_TOKEN, mock_server.uri())
        .expect("executor construction should succeed");
    let client = DownloadClient::with_path_prefix(Arc::new(executor), "/docs/v2");

    let payload = client
        .fetch_document("abc123")
        .await
        .expect("download under custom prefix should succeed");

    assert_eq!(payload, b"relocated");
}

#[tokio::test]
async fn test_download_client_is_reusable_across_operations() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/content.zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"first"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents/doc-1/thumbnail"))
        .and(query_param("width", "128"))
        .and(query_param("height", "96"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"second"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let archive = client.fetch_document("doc-1").await.expect("archive");
    let thumbnail = client
        .fetch_thumbnail("doc-1", 128, 96)
        .await
        .expect("thumbnail");

    assert_eq!(archive, b"first");
    assert_eq!(thumbnail, b"second");
}
