//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is immutable once built; every request
//! handler gets a cheap clone of the same `Arc`s.

use crate::config::AppConfig;
use std::{path::Path, sync::Arc};
use text2sql::{
    providers::{db::sqlite::SqliteProvider, factory::create_provider},
    sample::seed_sample_database,
    QueryExecutor, QueryGateway, SqlTranslator,
};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// Answers questions end to end.
    pub gateway: Arc<QueryGateway>,
}

/// Builds the shared application state from the configuration.
///
/// - Seeds the sample database when `seed_sample_data` is on and it has no tables.
/// - Instantiates the configured AI provider.
/// - Applies any prompt overrides and the read-only setting.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    if config.seed_sample_data {
        if let Some(parent) = Path::new(&config.database_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if seed_sample_database(&config.database_path).await? {
            info!(db_path = %config.database_path, "Sample database created.");
        }
    }

    let ai_provider = create_provider(&config.ai)?;

    let mut translator = SqlTranslator::new(ai_provider);
    if let Some(template) = &config.prompts.system_prompt {
        info!("Using system prompt from configuration.");
        translator = translator.with_system_prompt(template);
    }
    if let Some(template) = &config.prompts.user_prompt {
        info!("Using user prompt from configuration.");
        translator = translator.with_user_prompt(template);
    }

    let storage = SqliteProvider::new(&config.database_path);
    info!(db_path = %config.database_path, read_only = config.read_only, "Initialized storage provider (SQLite).");
    let executor = QueryExecutor::new(Box::new(storage)).read_only(config.read_only);

    Ok(AppState {
        config: Arc::new(config),
        gateway: Arc::new(QueryGateway::new(translator, executor)),
    })
}
