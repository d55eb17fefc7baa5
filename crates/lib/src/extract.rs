//! # SQL Extraction
//!
//! Language models rarely answer with nothing but a statement. This module
//! digs the first SQL statement out of whatever text came back.

use regex::Regex;
use std::sync::LazyLock;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:[A-Za-z]+[ \t]*\r?\n|[ \t]*\r?\n)?([\s\S]*?)```").expect("valid fenced block regex")
});

static STRAY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:sql|sqlite)?\n?").expect("valid fence regex"));

static LEADING_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:SQL Query:|Query:|SQL:)\s*").expect("valid label regex")
});

const SQL_KEYWORDS: &str =
    "SELECT|WITH|INSERT|UPDATE|DELETE|VALUES|EXPLAIN|PRAGMA|CREATE|DROP|ALTER|REPLACE";

// A keyword opening a line. Prose such as "a query to select the artists"
// only counts when no line starts with one.
static LINE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?im)^[ \t]*(?P<kw>(?:{SQL_KEYWORDS})\b)")).expect("valid keyword regex")
});

static FIRST_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{SQL_KEYWORDS})\b")).expect("valid keyword regex")
});

/// Extracts the first SQL statement from a model response.
///
/// Returns `None` when nothing statement-like is left after cleaning.
pub fn extract_sql(raw_response: &str) -> Option<String> {
    let text = raw_response.trim();

    let body = match FENCED_BLOCK.captures(text).and_then(|caps| caps.get(1)) {
        Some(block) => block.as_str().to_string(),
        None => STRAY_FENCE.replace_all(text, "").into_owned(),
    };

    let body = LEADING_LABEL.replace(body.trim(), "");
    let start = LINE_KEYWORD
        .captures(&body)
        .and_then(|caps| caps.name("kw"))
        .or_else(|| FIRST_KEYWORD.find(&body))?
        .start();
    let body = &body[start..];

    let statement = first_statement(body).trim();
    if statement.is_empty() || statement == ";" {
        None
    } else {
        Some(statement.to_string())
    }
}

/// Cuts `sql` after the first `;` outside quoted literals, identifiers and comments.
fn first_statement(sql: &str) -> &str {
    let bytes = sql.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => {
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    i += 1;
                }
            }
            b'-' if bytes.get(i + 1) == Some(&b'-') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i < bytes.len() && !(bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/')) {
                    i += 1;
                }
                i += 1;
            }
            b';' => return &sql[..=i],
            _ => {}
        }
        i += 1;
    }
    sql
}
