//! # API Client Tests
//!
//! Runs the client against an `httpmock` stand-in for the server.

use httpmock::{Method::GET, Method::POST, MockServer};
use serde_json::json;
use std::time::Duration;
use text2sql_chat::api_client::ApiClient;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_health_check_reflects_status() {
    let server = MockServer::start_async().await;
    let health = server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(200)
                .json_body(json!({"status": "healthy", "service": "text-to-sql-api"}));
        })
        .await;
    let client = client_for(&server);

    assert!(client.check_health().await);

    health.delete_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/health");
            then.status(503);
        })
        .await;
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn test_unreachable_backend_is_unhealthy() {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    assert!(!client.check_health().await);
}

#[tokio::test]
async fn test_query_success_is_parsed() {
    let server = MockServer::start_async().await;
    let query = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/query")
                .json_body(json!({"question": "How many artists are there?"}));
            then.status(200).json_body(json!({
                "success": true,
                "sql_query": "SELECT COUNT(*) FROM artists;",
                "columns": ["COUNT(*)"],
                "rows": [{"COUNT(*)": 10}],
                "result": "The result is: 10"
            }));
        })
        .await;

    let response = client_for(&server).query("How many artists are there?").await;

    query.assert_async().await;
    assert!(response.success);
    assert_eq!(response.result.as_deref(), Some("The result is: 10"));
    assert_eq!(response.rows[0]["COUNT(*)"], json!(10));
}

#[tokio::test]
async fn test_structured_failure_is_kept() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/query");
            then.status(500).json_body(json!({
                "success": false,
                "sql_query": "SELECT * FROM artistz;",
                "error": "SQL execution error: no such table: artistz (query: SELECT * FROM artistz;)"
            }));
        })
        .await;

    let response = client_for(&server).query("Show artists").await;

    assert!(!response.success);
    assert_eq!(response.sql_query.as_deref(), Some("SELECT * FROM artistz;"));
    assert!(response.error.unwrap().contains("no such table"));
}

#[tokio::test]
async fn test_unstructured_failure_becomes_backend_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/query");
            then.status(404).body("Not Found");
        })
        .await;

    let response = client_for(&server).query("Show artists").await;

    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("Backend error: 404 - Not Found"));
}

#[tokio::test]
async fn test_transport_failure_becomes_connection_error() {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

    let response = client.query("Show artists").await;

    assert!(!response.success);
    assert!(response
        .error
        .as_deref()
        .is_some_and(|e| e.starts_with("Connection error: ")));
}

#[tokio::test]
async fn test_schema_is_fetched() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/schema");
            then.status(200)
                .json_body(json!({"schema": "\nDatabase Schema:\n- artists: ArtistId, Name\n"}));
        })
        .await;

    let schema = client_for(&server).get_schema().await.unwrap();
    assert!(schema.contains("artists: ArtistId, Name"));
}
