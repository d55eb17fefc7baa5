//! # Application Configuration
//!
//! This module defines the configuration structure for the `text2sql-server` and
//! the logic for loading it. Values are layered, later layers winning:
//!
//! 1. Defaults declared on [`AppConfig`].
//! 2. An optional YAML file (`config.yml` in the working directory, or an explicit
//!    path), with `${VAR}` placeholders replaced from the environment.
//! 3. Plain environment variables for top-level keys (`PORT`, `DATABASE_PATH`).
//! 4. `TEXT2SQL_`-prefixed variables for nested keys (`TEXT2SQL_AI__MODEL_NAME`).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::{env, fs, path::Path, sync::LazyLock};
use thiserror::Error;
use text2sql::providers::factory::ProviderConfig;
use tracing::info;

/// The file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Environment variables consulted, in order, when no API key is configured.
const API_KEY_VARS: &[&str] = &["GOOGLE_API_KEY", "AI_API_KEY"];

static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").expect("valid placeholder regex")
});

/// A custom error type for configuration issues.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates a required configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the SQLite database file. Loaded from `DATABASE_PATH` env var.
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Creates the sample tables on startup when the database has none.
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
    /// Refuses generated statements that could modify the database.
    #[serde(default = "default_true")]
    pub read_only: bool,
    /// The AI provider used to generate SQL.
    #[serde(default)]
    pub ai: ProviderConfig,
    #[serde(default)]
    pub prompts: PromptsConfig,
}

/// Optional replacements for the built-in prompt templates.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PromptsConfig {
    /// May contain `{schema}` and `{examples}`.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// May contain `{question}`.
    #[serde(default)]
    pub user_prompt: Option<String>,
}

fn default_port() -> u16 {
    8000
}

fn default_database_path() -> String {
    "data/chinook.db".to_string()
}

fn default_true() -> bool {
    true
}

// Reads a file and substitutes `${VAR}` placeholders from the environment.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let expanded = ENV_PLACEHOLDER.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded.into_owned()))
}

/// Loads the application configuration from an optional file and the environment.
///
/// An explicit `config_path_override` must exist. Without one, `config.yml` in the
/// working directory is used if present and defaults apply otherwise.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            if let Some(content) = read_and_substitute(DEFAULT_CONFIG_FILE)? {
                info!("Loading configuration from '{DEFAULT_CONFIG_FILE}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            }
        }
    }

    let settings = builder
        // Top-level keys like PORT and DATABASE_PATH.
        .add_source(Environment::default())
        // Nested overrides, e.g. TEXT2SQL_AI__PROVIDER.
        .add_source(
            Environment::with_prefix("TEXT2SQL")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // A blank key (e.g. an unset `${GOOGLE_API_KEY}` placeholder) counts as missing.
    config.ai.api_key = config.ai.api_key.filter(|k| !k.trim().is_empty());
    if config.ai.api_key.is_none() {
        config.ai.api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| env::var(var).ok())
            .find(|key| !key.trim().is_empty());
    }

    Ok(config)
}
