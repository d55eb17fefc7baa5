//! # Natural Language to SQL
//!
//! This crate turns natural-language questions into SQL with a configurable AI
//! provider and executes the result against a local SQLite database.
//!
//! The pieces fit together as follows:
//!
//! - [`translator::SqlTranslator`] prompts the AI provider and extracts a statement.
//! - [`executor::QueryExecutor`] runs the statement through a [`providers::db::storage::Storage`].
//! - [`gateway::QueryGateway`] validates the question and chains the two.

pub mod errors;
pub mod executor;
pub mod extract;
pub mod format;
pub mod gateway;
pub mod prompts;
pub mod providers;
pub mod sample;
pub mod translator;
pub mod types;

pub use errors::{ErrorKind, Text2SqlError};
pub use executor::QueryExecutor;
pub use gateway::QueryGateway;
pub use translator::SqlTranslator;
pub use types::{QueryOutcome, QueryRequest, QueryResponse, ResultSet, Row};
