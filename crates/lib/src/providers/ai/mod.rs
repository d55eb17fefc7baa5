pub mod gemini;
pub mod local;

use crate::errors::Text2SqlError;
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// The default per-request timeout for AI provider calls.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A trait for interacting with an AI provider.
///
/// This trait defines a common interface for generating SQL queries from natural language
/// using different Large Language Models (e.g., Gemini, local models).
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    ///
    /// The result is the model's raw text; callers extract whatever they need from it.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Text2SqlError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Reads the error body of a non-successful provider response.
pub(crate) async fn api_error(response: reqwest::Response) -> Text2SqlError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Text2SqlError::AiApi { status, body }
}
