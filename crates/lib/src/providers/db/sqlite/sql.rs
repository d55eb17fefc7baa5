//! # SQLite Specific SQL
//!
//! This module centralizes SQL strings for the SQLite provider.

/// Lists user tables, skipping SQLite's internal bookkeeping tables.
pub const LIST_TABLES: &str =
    "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name;";

/// The script that creates and fills the bundled Chinook sample database.
pub const CHINOOK_SAMPLE_SQL: &str = include_str!("../../../../sql/chinook_sample.sql");
