//! # Query Executor
//!
//! Runs generated SQL against the configured storage provider. Unless the
//! executor is built with `read_only` switched off, statements that could
//! modify the database are refused before they reach it.

use crate::{errors::Text2SqlError, providers::db::storage::Storage, types::ResultSet};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{info, warn};

// One alternation, so a quote inside a comment never opens a literal and
// `--` inside a literal never starts a comment.
static LITERAL_OR_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<comment>--[^\n]*|/\*[\s\S]*?\*/)|'(?:[^']|'')*'|"(?:[^"]|"")*"|`[^`]*`"#)
        .expect("valid literal regex")
});

static MODIFYING_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:INSERT|UPDATE|DELETE|DROP|ALTER|CREATE|ATTACH|DETACH|PRAGMA|VACUUM|REINDEX)\b|\bREPLACE\s+INTO\b",
    )
    .expect("valid keyword regex")
});

const READ_ONLY_LEADING_KEYWORDS: &[&str] = &["SELECT", "WITH", "VALUES", "EXPLAIN"];

/// Reports whether `sql` is a single statement that only reads data.
///
/// Literals, quoted identifiers and comments are ignored, so a string such as
/// `'drop everything'` does not count against the statement.
pub fn is_read_only(sql: &str) -> bool {
    let stripped = LITERAL_OR_COMMENT.replace_all(sql, |caps: &regex::Captures| {
        if caps.name("comment").is_some() {
            " "
        } else {
            "''"
        }
    });
    let body = stripped.trim_start().trim_start_matches('(').trim_start();

    let first_word: String = body
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_uppercase();

    READ_ONLY_LEADING_KEYWORDS.contains(&first_word.as_str())
        && !MODIFYING_KEYWORD.is_match(&stripped)
}

/// Executes SQL statements against a storage provider.
#[derive(Debug, Clone)]
pub struct QueryExecutor {
    storage: Box<dyn Storage>,
    read_only: bool,
}

impl QueryExecutor {
    /// Creates an executor that refuses data-modifying statements.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            read_only: true,
        }
    }

    /// Toggles the read-only guard. With `false`, statements run exactly as given.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Executes one statement and returns its rows.
    pub async fn execute(&self, sql: &str) -> Result<ResultSet, Text2SqlError> {
        if self.read_only && !is_read_only(sql) {
            warn!(sql = %sql, "Refusing to execute a statement that is not read-only.");
            return Err(Text2SqlError::ReadOnlyViolation {
                sql: sql.to_string(),
            });
        }

        info!(storage = %self.storage.name(), "Executing generated SQL.");
        self.storage.execute_query(sql).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_and_ctes_are_read_only() {
        assert!(is_read_only("SELECT COUNT(*) FROM artists;"));
        assert!(is_read_only("  select Name from genres"));
        assert!(is_read_only(
            "WITH totals AS (SELECT CustomerId, SUM(Total) t FROM invoices GROUP BY CustomerId) SELECT * FROM totals;"
        ));
        assert!(is_read_only("(SELECT 1) UNION (SELECT 2)"));
        assert!(is_read_only("EXPLAIN SELECT 1"));
    }

    #[test]
    fn modifying_statements_are_rejected() {
        assert!(!is_read_only("DELETE FROM artists;"));
        assert!(!is_read_only("DROP TABLE tracks"));
        assert!(!is_read_only("UPDATE tracks SET UnitPrice = 0"));
        assert!(!is_read_only("INSERT INTO genres (Name) VALUES ('Polka')"));
        assert!(!is_read_only("PRAGMA writable_schema = 1"));
        assert!(!is_read_only(
            "WITH doomed AS (SELECT 1) DELETE FROM artists WHERE ArtistId IN doomed"
        ));
    }

    #[test]
    fn keywords_inside_literals_and_comments_are_ignored() {
        assert!(is_read_only(
            "SELECT Name FROM tracks WHERE Name = 'Drop the Bass' -- delete later"
        ));
        assert!(is_read_only("SELECT \"update\" FROM t /* INSERT */"));
    }

    #[test]
    fn apostrophe_in_comment_does_not_hide_later_statements() {
        assert!(!is_read_only(
            "SELECT Name FROM artists -- artist's name\n; DELETE FROM artists; -- it's gone"
        ));
        assert!(is_read_only("SELECT Name FROM artists -- artist's name\n;"));
        assert!(is_read_only("SELECT '--not a comment; DROP' FROM artists"));
    }

    #[test]
    fn replace_function_is_allowed_but_replace_into_is_not() {
        assert!(is_read_only("SELECT REPLACE(Name, 'a', 'b') FROM artists"));
        assert!(!is_read_only("REPLACE INTO artists VALUES (1, 'x')"));
    }
}
