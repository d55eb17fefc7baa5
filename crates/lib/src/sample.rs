//! # Sample Database
//!
//! Creates the bundled Chinook subset that the schema description in
//! [`crate::prompts::schema`] refers to.

use crate::{
    errors::Text2SqlError,
    providers::db::{
        sqlite::{sql::CHINOOK_SAMPLE_SQL, SqliteProvider},
        storage::Storage,
    },
};
use tracing::info;

/// Seeds the sample database at `db_path` unless it already contains tables.
///
/// Returns `true` when the script ran.
pub async fn seed_sample_database(db_path: &str) -> Result<bool, Text2SqlError> {
    let provider = SqliteProvider::new(db_path);
    let tables = provider.list_tables().await?;
    if !tables.is_empty() {
        info!(db_path = %db_path, tables = tables.len(), "Database already has tables, skipping seed.");
        return Ok(false);
    }

    info!(db_path = %db_path, "Seeding Chinook sample database.");
    provider.initialize_with_data(CHINOOK_SAMPLE_SQL).await?;
    Ok(true)
}
