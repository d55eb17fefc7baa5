//! # AI Provider Factory
//!
//! Centralizes the creation of AI provider instances from configuration so that
//! every consumer (server, tests) builds providers the same way.

use crate::{
    errors::Text2SqlError,
    providers::ai::{
        gemini::{gemini_api_url, GeminiProvider, DEFAULT_GEMINI_MODEL},
        local::LocalAiProvider,
        AiProvider, DEFAULT_TIMEOUT_SECS,
    },
};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

/// The configuration of the AI provider used for query generation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ProviderConfig {
    /// The type of provider ("gemini" or "local").
    #[serde(default = "default_provider")]
    pub provider: String,
    /// The API URL. Optional for Gemini, where it is derived from the model name.
    #[serde(default)]
    pub api_url: Option<String>,
    /// The API key, which can be null for local providers.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Seconds to wait for the provider before giving up.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model_name() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_url: None,
            api_key: None,
            model_name: default_model_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Instantiates the provider described by `config`.
pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn AiProvider>, Text2SqlError> {
    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = config
                .api_key
                .clone()
                .filter(|k| !k.trim().is_empty())
                .ok_or_else(|| Text2SqlError::MissingApiKey("gemini".to_string()))?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| gemini_api_url(&config.model_name));
            info!(model = %config.model_name, "Configuring Gemini provider.");
            Box::new(GeminiProvider::new(api_url, api_key, timeout)?)
        }
        "local" => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                Text2SqlError::MissingAiProvider(
                    "api_url is required for the local provider".to_string(),
                )
            })?;
            info!(api_url = %api_url, model = %config.model_name, "Configuring local AI provider.");
            Box::new(LocalAiProvider::new(
                api_url,
                config.api_key.clone(),
                Some(config.model_name.clone()),
                timeout,
            )?)
        }
        other => {
            return Err(Text2SqlError::MissingAiProvider(format!(
                "unsupported provider type '{other}'"
            )))
        }
    };
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_requires_an_api_key() {
        let config = ProviderConfig::default();
        let err = create_provider(&config).unwrap_err();
        assert!(matches!(err, Text2SqlError::MissingApiKey(_)));
    }

    #[test]
    fn local_requires_an_api_url() {
        let config = ProviderConfig {
            provider: "local".into(),
            ..Default::default()
        };
        let err = create_provider(&config).unwrap_err();
        assert!(matches!(err, Text2SqlError::MissingAiProvider(_)));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = ProviderConfig {
            provider: "carrier-pigeon".into(),
            ..Default::default()
        };
        assert!(create_provider(&config).is_err());
    }

    #[test]
    fn gemini_with_key_builds() {
        let config = ProviderConfig {
            api_key: Some("test-key".into()),
            ..Default::default()
        };
        assert!(create_provider(&config).is_ok());
    }
}
