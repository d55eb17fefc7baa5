//! # Shared Data Types
//!
//! Types that travel through the pipeline and over the wire between the
//! gateway server and its clients.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single result row, keyed by column name.
pub type Row = Map<String, Value>;

/// The rows produced by executing one SQL statement.
///
/// `columns` keeps the order in which the database reported the columns, since
/// a [`Row`] does not preserve insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Iterates the values of a row in column order.
    pub fn values<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = &'a Value> + 'a {
        self.columns
            .iter()
            .map(move |c| row.get(c).unwrap_or(&Value::Null))
    }
}

/// The successful outcome of answering one question.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub sql: String,
    pub result_set: ResultSet,
    pub summary: String,
}

/// The request body for `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
}

/// The response body for `POST /query`, used for both success and failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    /// Builds a failure response, optionally echoing the SQL that caused it.
    pub fn failure(error: impl Into<String>, sql_query: Option<String>) -> Self {
        Self {
            success: false,
            sql_query,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

impl From<QueryOutcome> for QueryResponse {
    fn from(outcome: QueryOutcome) -> Self {
        Self {
            success: true,
            sql_query: Some(outcome.sql),
            columns: outcome.result_set.columns,
            rows: outcome.result_set.rows,
            result: Some(outcome.summary),
            error: None,
        }
    }
}
