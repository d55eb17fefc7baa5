use crate::{
    errors::Text2SqlError,
    providers::ai::{api_error, AiProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, time::Duration};
use tracing::debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct LocalAiRequest<'a> {
    messages: Vec<LocalAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct LocalAiMessage {
    role: String,
    #[serde(default)]
    content: String,
}

#[derive(Deserialize, Debug)]
struct LocalAiResponse {
    #[serde(default)]
    choices: Vec<LocalAiChoice>,
}

#[derive(Deserialize, Debug)]
struct LocalAiChoice {
    message: LocalAiMessage,
}

// --- Local Provider implementation ---

/// A provider for interacting with a local or OpenAI-compatible API.
#[derive(Clone, Debug)]
pub struct LocalAiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl LocalAiProvider {
    /// Creates a new `LocalAiProvider` whose requests give up after `timeout`.
    pub fn new(
        api_url: String,
        api_key: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, Text2SqlError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(Text2SqlError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl AiProvider for LocalAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Text2SqlError> {
        let messages = vec![
            LocalAiMessage {
                role: "system".to_string(),
                content: system_prompt.to_string(),
            },
            LocalAiMessage {
                role: "user".to_string(),
                content: user_prompt.to_string(),
            },
        ];

        let request_body = LocalAiRequest {
            messages,
            model: self.model.as_deref(),
            temperature: 0.0,
            max_tokens: 1500,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);

        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            request_builder = request_builder.bearer_auth(key);
        }

        debug!(api_url = %self.api_url, "--> Sending request to local AI provider");
        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(Text2SqlError::from_ai_transport)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let local_ai_response: LocalAiResponse = response
            .json()
            .await
            .map_err(Text2SqlError::AiDeserialization)?;

        let text = local_ai_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Text2SqlError::EmptyAiResponse);
        }
        Ok(text)
    }
}
