//! # SQLite Provider Tests
//!
//! Verifies that the `SqliteProvider` executes statements against a database
//! file, reports failures as SQL execution errors carrying the statement, and
//! that the bundled sample database seeds correctly.

mod common;

use crate::common::setup_tracing;
use serde_json::json;
use tempfile::NamedTempFile;
use text2sql::{
    providers::db::{sqlite::SqliteProvider, storage::Storage},
    sample::seed_sample_database,
    ErrorKind, Text2SqlError,
};
use text2sql_test_utils::SampleDb;

#[tokio::test]
async fn test_sqlite_provider_basic_query() {
    setup_tracing();

    // 1. Setup: a provider over a fresh temporary file.
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let provider = SqliteProvider::new(db_file.path().to_str().unwrap());

    // 2. Arrange: create a table and insert data.
    let setup_sql = "
        CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
        INSERT INTO users (id, name) VALUES (1, 'Alice');
        INSERT INTO users (id, name) VALUES (2, 'Bob');
    ";
    provider
        .initialize_with_data(setup_sql)
        .await
        .expect("Failed to initialize database with test data");

    // 3. Act: the provider reopens the file for every query.
    let result = provider
        .execute_query("SELECT id, name FROM users ORDER BY id ASC")
        .await
        .expect("Failed to execute query");

    // 4. Assert
    assert_eq!(result.columns, vec!["id", "name"]);
    assert_eq!(
        serde_json::to_value(&result.rows).unwrap(),
        json!([
            {"id": 1, "name": "Alice"},
            {"id": 2, "name": "Bob"}
        ])
    );
}

#[tokio::test]
async fn test_invalid_sql_is_a_sql_execution_error() {
    setup_tracing();
    let sample = SampleDb::new().await.expect("Failed to seed sample db");
    let provider = sample.provider();

    let bad_sql = "SELECT Nope FROM no_such_table;";
    let err = provider
        .execute_query(bad_sql)
        .await
        .expect_err("Query against a missing table should fail");

    assert_eq!(err.kind(), ErrorKind::SqlExecution);
    assert_eq!(err.sql(), Some(bad_sql));
}

#[tokio::test]
async fn test_syntax_error_is_a_sql_execution_error() {
    setup_tracing();
    let sample = SampleDb::new().await.expect("Failed to seed sample db");

    let err = sample
        .provider()
        .execute_query("SELEC Name FROM artists")
        .await
        .expect_err("Malformed SQL should fail");

    assert!(matches!(err, Text2SqlError::SqlExecution { .. }));
}

#[tokio::test]
async fn test_sample_database_contents() {
    setup_tracing();
    let sample = SampleDb::new().await.expect("Failed to seed sample db");
    let provider = sample.provider();

    let tables = provider.list_tables().await.unwrap();
    for expected in [
        "albums",
        "artists",
        "customers",
        "employees",
        "genres",
        "invoice_items",
        "invoices",
        "media_types",
        "playlist_track",
        "playlists",
        "tracks",
    ] {
        assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
    }

    let result = provider
        .execute_query("SELECT COUNT(*) AS total_artists FROM artists;")
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.rows[0]["total_artists"], json!(10));

    let result = provider
        .execute_query(
            "SELECT al.Title FROM albums al JOIN artists ar ON al.ArtistId = ar.ArtistId WHERE ar.Name = 'AC/DC' ORDER BY al.AlbumId;",
        )
        .await
        .unwrap();
    let titles: Vec<_> = result.rows.iter().map(|r| r["Title"].clone()).collect();
    assert_eq!(
        titles,
        vec![
            json!("For Those About To Rock We Salute You"),
            json!("Let There Be Rock")
        ]
    );
}

#[tokio::test]
async fn test_seeding_is_skipped_when_tables_exist() {
    setup_tracing();
    let sample = SampleDb::new().await.expect("Failed to seed sample db");

    let seeded_again = seed_sample_database(&sample.db_path).await.unwrap();
    assert!(!seeded_again);

    let result = sample
        .provider()
        .execute_query("SELECT COUNT(*) AS n FROM genres")
        .await
        .unwrap();
    assert_eq!(result.rows[0]["n"], json!(7));
}
