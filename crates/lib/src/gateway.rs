//! # The Query Gateway
//!
//! This module defines the `QueryGateway`, the entry point for answering a
//! question end to end. It holds the translator and the executor and exposes
//! one high-level method that any consumer (the HTTP server, tests) can call.

use crate::{
    errors::Text2SqlError, executor::QueryExecutor, format::summarize, translator::SqlTranslator,
    types::QueryOutcome,
};
use tracing::{error, info, instrument};

/// Answers natural-language questions by translating them to SQL and running it.
#[derive(Debug, Clone)]
pub struct QueryGateway {
    translator: SqlTranslator,
    executor: QueryExecutor,
}

impl QueryGateway {
    pub fn new(translator: SqlTranslator, executor: QueryExecutor) -> Self {
        Self {
            translator,
            executor,
        }
    }

    pub fn translator(&self) -> &SqlTranslator {
        &self.translator
    }

    /// Translates `question` to SQL, executes it and summarizes the rows.
    ///
    /// An empty question fails with [`Text2SqlError::EmptyQuestion`] before the
    /// translator is contacted.
    #[instrument(skip(self))]
    pub async fn answer(&self, question: &str) -> Result<QueryOutcome, Text2SqlError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Text2SqlError::EmptyQuestion);
        }

        info!("Translating question to SQL.");
        let sql = self.translator.translate(question).await.inspect_err(|e| {
            error!("Translation failed: {e}");
        })?;

        let result_set = self.executor.execute(&sql).await.inspect_err(|e| {
            error!("Query execution error: {e}");
        })?;

        let summary = summarize(&sql, &result_set);
        Ok(QueryOutcome {
            sql,
            result_set,
            summary,
        })
    }
}
