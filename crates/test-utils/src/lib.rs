//! # Shared Test Fixtures
//!
//! Helpers used by the integration tests of every crate in the workspace:
//! a scriptable AI provider and a throwaway copy of the sample database.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use text2sql::{
    providers::{ai::AiProvider, db::sqlite::SqliteProvider},
    sample::seed_sample_database,
    Text2SqlError,
};

// --- Test Setup ---

/// A seeded copy of the sample database in a temporary file.
///
/// The file is removed when the value is dropped, so keep it alive for as
/// long as anything reads from `db_path`.
pub struct SampleDb {
    pub db_path: String,
    _db_file: NamedTempFile,
}

impl SampleDb {
    pub async fn new() -> Result<Self> {
        let db_file = NamedTempFile::new()?;
        let db_path = db_file
            .path()
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("temp path is not valid UTF-8"))?
            .to_string();
        seed_sample_database(&db_path).await?;
        Ok(Self {
            db_path,
            _db_file: db_file,
        })
    }

    pub fn provider(&self) -> SqliteProvider {
        SqliteProvider::new(&self.db_path)
    }
}

// --- Mock AI Provider ---

/// One scripted answer of the [`MockAiProvider`].
#[derive(Clone, Debug)]
pub enum MockReply {
    /// The model answers with this text.
    Text(String),
    /// The provider answers with a non-success HTTP status.
    ApiError { status: u16, body: String },
    /// The provider answers, but with no usable text.
    Empty,
}

/// An AI provider that replays scripted replies in order and records every call.
#[derive(Clone, Debug, Default)]
pub struct MockAiProvider {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiProvider {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider whose first call answers with `sql`.
    pub fn answering(sql: &str) -> Self {
        Self::new(vec![MockReply::Text(sql.to_string())])
    }

    /// A provider whose first call fails with an upstream API error.
    pub fn failing(status: u16) -> Self {
        Self::new(vec![MockReply::ApiError {
            status,
            body: "mock upstream failure".to_string(),
        }])
    }

    /// Retrieves the recorded `(system_prompt, user_prompt)` calls for assertion.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Text2SqlError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        match self.replies.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::ApiError { status, body }) => Err(Text2SqlError::AiApi { status, body }),
            Some(MockReply::Empty) => Err(Text2SqlError::EmptyAiResponse),
            None => Err(Text2SqlError::AiApi {
                status: 500,
                body: format!("MockAiProvider: no reply scripted for '{user_prompt}'"),
            }),
        }
    }
}
