#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Tracing setup and a recording storage provider shared by the library tests.

use async_trait::async_trait;
use dotenvy::dotenv;
use std::sync::{Arc, Mutex, Once};
use text2sql::{providers::db::storage::Storage, ResultSet, Text2SqlError};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

// --- Mock Storage Provider for Testing ---

/// A storage provider that records every statement and returns no rows.
#[derive(Clone, Debug, Default)]
pub struct RecordingStorage {
    pub executed: Arc<Mutex<Vec<String>>>,
}

impl RecordingStorage {
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    fn name(&self) -> &str {
        "MockDB"
    }

    async fn execute_query(&self, sql: &str) -> Result<ResultSet, Text2SqlError> {
        self.executed.lock().unwrap().push(sql.to_string());
        Ok(ResultSet::default())
    }

    async fn list_tables(&self) -> Result<Vec<String>, Text2SqlError> {
        Ok(Vec::new())
    }
}
