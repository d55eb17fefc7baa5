//! # API Client
//!
//! This module provides a client for interacting with the `text2sql-server` API.
//! Query failures of any kind come back as a [`QueryResponse`] with
//! `success: false`, so the chat loop has a single shape to render.

use anyhow::{bail, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use text2sql::{QueryRequest, QueryResponse};
use tracing::{info, warn};

/// Health checks give up sooner than queries.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// The client for making API calls to the `text2sql-server`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient` whose requests give up after `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reports whether `GET /health` answers with a success status.
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Health check against {} failed: {}", url, e);
                false
            }
        }
    }

    /// Fetches the schema description from `GET /schema`.
    pub async fn get_schema(&self) -> Result<String> {
        let url = format!("{}/schema", self.base_url);
        info!("Fetching schema from: {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("Failed to fetch schema. Server responded with {status}: {error_text}");
        }

        let body: Value = response.json().await?;
        match body["schema"].as_str() {
            Some(schema) => Ok(schema.to_string()),
            None => bail!("Schema response did not contain a 'schema' string"),
        }
    }

    /// Sends `question` to `POST /query`.
    pub async fn query(&self, question: &str) -> QueryResponse {
        let url = format!("{}/query", self.base_url);
        info!("Sending question to: {}", url);

        let request = QueryRequest {
            question: question.to_string(),
        };
        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => return QueryResponse::failure(format!("Connection error: {e}"), None),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return QueryResponse::failure(format!("Connection error: {e}"), None),
        };

        let parsed = serde_json::from_str::<QueryResponse>(&body);
        if status.is_success() {
            return parsed.unwrap_or_else(|e| {
                QueryResponse::failure(format!("Unexpected response from backend: {e}"), None)
            });
        }

        match parsed {
            Ok(failure) if failure.error.is_some() => failure,
            _ => QueryResponse::failure(
                format!("Backend error: {} - {}", status.as_u16(), body),
                None,
            ),
        }
    }
}
