use crate::{
    errors::Text2SqlError,
    providers::ai::{api_error, AiProvider},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, time::Duration};
use tracing::debug;

/// The model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Builds the `generateContent` endpoint for a Gemini model.
pub fn gemini_api_url(model_name: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{model_name}:generateContent")
}

// --- Gemini-specific request and response structures ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize, Debug)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize, Debug)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

// --- Gemini Provider implementation ---

/// A provider for interacting with the Google Gemini API.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: String,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider` whose requests give up after `timeout`.
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, Text2SqlError> {
        if api_key.trim().is_empty() {
            return Err(Text2SqlError::MissingApiKey("gemini".to_string()));
        }
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(Text2SqlError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Text2SqlError> {
        let request_body = GeminiRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: user_prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.0 },
        };

        debug!(api_url = %self.api_url, "--> Sending request to Gemini");
        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(Text2SqlError::from_ai_transport)?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(Text2SqlError::AiDeserialization)?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Text2SqlError::EmptyAiResponse);
        }
        Ok(text)
    }
}
