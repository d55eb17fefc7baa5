use super::{AppError, AppState};
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use text2sql::{QueryRequest, QueryResponse};
use tracing::info;

/// The handler for `POST /query`: turns a question into SQL, runs it and
/// returns the rows alongside the generated statement.
pub async fn query_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let Json(request) = payload?;
    info!(question = %request.question, "Received query request.");

    let outcome = app_state.gateway.answer(&request.question).await?;
    info!(sql = %outcome.sql, rows = outcome.result_set.len(), "Question answered.");

    Ok(Json(outcome.into()))
}
