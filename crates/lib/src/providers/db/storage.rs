use crate::{errors::Text2SqlError, types::ResultSet};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a storage backend.
///
/// This trait defines a common interface for executing generated SQL and
/// inspecting what the database contains.
#[async_trait]
pub trait Storage: Send + Sync + DynClone + Debug {
    /// Returns the name of the storage provider (e.g., "SQLite").
    fn name(&self) -> &str;

    /// Executes a single SQL statement and materializes every row it returns.
    async fn execute_query(&self, sql: &str) -> Result<ResultSet, Text2SqlError>;

    /// Lists the user tables present in the database.
    async fn list_tables(&self) -> Result<Vec<String>, Text2SqlError>;
}

dyn_clone::clone_trait_object!(Storage);
