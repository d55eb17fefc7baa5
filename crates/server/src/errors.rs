use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use text2sql::{ErrorKind, QueryResponse, Text2SqlError};
use tracing::{error, warn};

/// Returned instead of the provider's own message, which may leak details.
pub const UPSTREAM_ERROR_MESSAGE: &str =
    "The language model service failed to produce a query. Please try again later.";

const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// A custom error type for the server application.
///
/// Every variant renders as a [`QueryResponse`] with `success: false`, so clients
/// can parse success and failure bodies alike.
#[derive(Debug)]
pub enum AppError {
    /// Errors from the question-answering pipeline.
    Query(Text2SqlError),
    /// The request body was not a valid question payload.
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<Text2SqlError> for AppError {
    fn from(err: Text2SqlError) -> Self {
        AppError::Query(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message, sql_query) = match self {
            AppError::Query(err) => {
                let sql_query = err.sql().map(str::to_string);
                match err.kind() {
                    ErrorKind::ClientInput => {
                        warn!("Rejected question: {err}");
                        (StatusCode::BAD_REQUEST, err.to_string(), None)
                    }
                    ErrorKind::Upstream => {
                        error!("Upstream AI error: {err:?}");
                        (
                            StatusCode::BAD_GATEWAY,
                            UPSTREAM_ERROR_MESSAGE.to_string(),
                            None,
                        )
                    }
                    ErrorKind::SqlExecution => {
                        error!("SQL execution error: {err}");
                        (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), sql_query)
                    }
                    ErrorKind::Internal => {
                        error!("Internal pipeline error: {err:?}");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            INTERNAL_ERROR_MESSAGE.to_string(),
                            None,
                        )
                    }
                }
            }
            AppError::BadRequest(message) => {
                warn!("Malformed request body: {message}");
                (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid request body: {message}"),
                    None,
                )
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                    None,
                )
            }
        };

        (status_code, Json(QueryResponse::failure(message, sql_query))).into_response()
    }
}
