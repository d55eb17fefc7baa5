//! # General Route Handlers
//!
//! The root, health check and schema endpoints. None of them touch the
//! database or the AI provider.

use crate::types::{HealthResponse, RootResponse, SchemaResponse};
use axum::Json;
use text2sql::prompts::schema::SCHEMA_DESCRIPTION;

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Text-to-SQL API is running!".to_string(),
        status: "healthy".to_string(),
    })
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "text-to-sql-api".to_string(),
    })
}

/// Returns the schema description the prompts are built from.
pub async fn schema_handler() -> Json<SchemaResponse> {
    Json(SchemaResponse {
        schema: SCHEMA_DESCRIPTION.to_string(),
    })
}
