//! # NL-to-SQL Translator
//!
//! Builds the query-generation prompt, sends it to the AI provider and
//! extracts a single SQL statement from the answer.

use crate::{
    errors::Text2SqlError,
    extract::extract_sql,
    prompts::{
        core::{render_system_prompt, render_user_prompt, DEFAULT_SYSTEM_PROMPT, DEFAULT_USER_PROMPT},
        schema::{render_examples, FEW_SHOT_EXAMPLES, SCHEMA_DESCRIPTION},
    },
    providers::ai::AiProvider,
};
use tracing::{debug, info, warn};

/// Translates natural-language questions into SQL using an AI provider.
#[derive(Debug, Clone)]
pub struct SqlTranslator {
    ai_provider: Box<dyn AiProvider>,
    system_prompt: String,
    user_prompt_template: String,
}

impl SqlTranslator {
    /// Creates a translator with the default prompts for the sample database.
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self {
            ai_provider,
            system_prompt: render_system_prompt(
                DEFAULT_SYSTEM_PROMPT,
                SCHEMA_DESCRIPTION,
                &render_examples(FEW_SHOT_EXAMPLES),
            ),
            user_prompt_template: DEFAULT_USER_PROMPT.to_string(),
        }
    }

    /// Replaces the system prompt template. `{schema}` and `{examples}` are filled in.
    pub fn with_system_prompt(mut self, template: &str) -> Self {
        self.system_prompt = render_system_prompt(
            template,
            SCHEMA_DESCRIPTION,
            &render_examples(FEW_SHOT_EXAMPLES),
        );
        self
    }

    /// Replaces the user prompt template. `{question}` is filled in per request.
    pub fn with_user_prompt(mut self, template: &str) -> Self {
        self.user_prompt_template = template.to_string();
        self
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    /// Asks the AI provider for a query answering `question` and extracts it.
    pub async fn translate(&self, question: &str) -> Result<String, Text2SqlError> {
        let user_prompt = render_user_prompt(&self.user_prompt_template, question);

        debug!(system_prompt = %self.system_prompt, user_prompt = %user_prompt, "--> Sending prompts to AI Provider");
        let raw_response = self
            .ai_provider
            .generate(&self.system_prompt, &user_prompt)
            .await?;
        debug!("<-- Query from AI: {}", &raw_response);

        match extract_sql(&raw_response) {
            Some(sql) => {
                info!(sql = %sql, "Extracted SQL from AI response.");
                Ok(sql)
            }
            None => {
                warn!("AI response did not contain a SQL statement.");
                Err(Text2SqlError::NoSqlInResponse(raw_response))
            }
        }
    }
}
