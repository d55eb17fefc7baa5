use crate::{
    errors::Text2SqlError,
    providers::db::storage::Storage,
    types::{ResultSet, Row},
};
use async_trait::async_trait;
use serde_json::Value;
use std::{
    collections::HashSet,
    fmt::{self, Debug},
};
use tracing::{debug, info};
use turso::{Connection, Value as TursoValue};

pub mod sql;

/// A provider for executing queries against a local SQLite database file using Turso.
///
/// The provider only remembers the path. Every call opens the file afresh, so
/// no handle is shared between requests and a replaced file is picked up
/// without a restart.
#[derive(Clone)]
pub struct SqliteProvider {
    db_path: String,
}

impl SqliteProvider {
    /// Creates a new `SqliteProvider` for the database file at `db_path`.
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Opens the database file and returns a fresh connection to it.
    async fn connect(&self) -> Result<Connection, Text2SqlError> {
        let db = turso::Builder::new_local(&self.db_path)
            .build()
            .await
            .map_err(|e| Text2SqlError::StorageConnection(e.to_string()))?;
        db.connect()
            .map_err(|e| Text2SqlError::StorageConnection(e.to_string()))
    }

    /// Executes a multi-statement script, one statement at a time.
    ///
    /// Statements are split on `;`, so the script must not contain semicolons
    /// inside string literals.
    pub async fn initialize_with_data(&self, init_sql: &str) -> Result<(), Text2SqlError> {
        let conn = self.connect().await?;

        for statement in init_sql.split(';').filter(|s| !s.trim().is_empty()) {
            conn.execute(statement, ())
                .await
                .map_err(|e| Text2SqlError::SqlExecution {
                    sql: statement.trim().to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(())
    }
}

impl Debug for SqliteProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteProvider")
            .field("db_path", &self.db_path)
            .finish()
    }
}

/// Converts a Turso value to a serde_json::Value.
fn turso_value_to_json(v: TursoValue) -> Value {
    match v {
        TursoValue::Null => Value::Null,
        TursoValue::Integer(i) => Value::Number(i.into()),
        TursoValue::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        TursoValue::Text(s) => Value::String(s),
        TursoValue::Blob(_) => Value::String("<blob>".to_string()),
    }
}

/// Makes column names unique so that no value is lost when a row becomes a map.
/// The second `Name` becomes `Name_2`, the third `Name_3`, and so on. A suffix
/// never reuses a name the statement itself returns.
fn unique_column_names(names: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::with_capacity(names.len());
    for name in names {
        if seen.insert(name.clone()) {
            unique.push(name);
            continue;
        }
        let mut n = 2;
        let mut candidate = format!("{name}_{n}");
        while taken.contains(&candidate) {
            n += 1;
            candidate = format!("{name}_{n}");
        }
        taken.insert(candidate.clone());
        unique.push(candidate);
    }
    unique
}

#[async_trait]
impl Storage for SqliteProvider {
    fn name(&self) -> &str {
        "SQLite"
    }

    /// Executes a query on SQLite and materializes the rows.
    async fn execute_query(&self, query: &str) -> Result<ResultSet, Text2SqlError> {
        debug!(query = %query, "--> Executing SQLite query");

        let conn = self.connect().await?;
        let sql_error = |e: turso::Error| Text2SqlError::SqlExecution {
            sql: query.to_string(),
            message: e.to_string(),
        };

        let mut stmt = conn.prepare(query).await.map_err(sql_error)?;

        let columns = unique_column_names(
            stmt.columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
        );

        let mut rows = stmt.query(()).await.map_err(sql_error)?;

        let mut result_rows: Vec<Row> = Vec::new();
        while let Some(row) = rows.next().await.map_err(sql_error)? {
            let mut row_map = Row::new();
            for (i, name) in columns.iter().enumerate() {
                let value = row.get_value(i).map_err(sql_error)?;
                row_map.insert(name.clone(), turso_value_to_json(value));
            }
            result_rows.push(row_map);
        }

        info!(rows = result_rows.len(), "Query returned rows.");
        Ok(ResultSet {
            columns,
            rows: result_rows,
        })
    }

    async fn list_tables(&self) -> Result<Vec<String>, Text2SqlError> {
        let conn = self.connect().await?;
        let mut rows = conn
            .query(sql::LIST_TABLES, ())
            .await
            .map_err(|e| Text2SqlError::StorageConnection(e.to_string()))?;

        let mut tables = Vec::new();
        while let Some(row) = rows
            .next()
            .await
            .map_err(|e| Text2SqlError::StorageConnection(e.to_string()))?
        {
            if let Ok(TursoValue::Text(name)) = row.get_value(0) {
                tables.push(name);
            }
        }
        Ok(tables)
    }
}
