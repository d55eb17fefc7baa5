use thiserror::Error;

/// Broad classification of a [`Text2SqlError`], used by callers to decide how
/// to surface it (for example, which HTTP status to answer with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller sent something unusable (e.g. an empty question).
    ClientInput,
    /// The language model provider failed or answered with something unusable.
    Upstream,
    /// The generated SQL could not be executed.
    SqlExecution,
    /// Misconfiguration or local infrastructure failure.
    Internal,
}

/// Custom error types for the text-to-SQL pipeline.
#[derive(Error, Debug)]
pub enum Text2SqlError {
    #[error("Question must not be empty")]
    EmptyQuestion,
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("AI provider is not configured: {0}")]
    MissingAiProvider(String),
    #[error("API key is missing for the {0} provider")]
    MissingApiKey(String),
    #[error("Request to AI provider timed out: {0}")]
    AiTimeout(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error ({status}): {body}")]
    AiApi { status: u16, body: String },
    #[error("AI provider returned an empty response")]
    EmptyAiResponse,
    #[error("No SQL statement found in AI response: {0}")]
    NoSqlInResponse(String),
    #[error("Storage provider connection error: {0}")]
    StorageConnection(String),
    #[error("SQL execution error: {message} (query: {sql})")]
    SqlExecution { sql: String, message: String },
    #[error("Only read-only statements may be executed (query: {sql})")]
    ReadOnlyViolation { sql: String },
}

impl Text2SqlError {
    /// Classifies the error for presentation to the caller.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Text2SqlError::EmptyQuestion => ErrorKind::ClientInput,
            Text2SqlError::AiTimeout(_)
            | Text2SqlError::AiRequest(_)
            | Text2SqlError::AiDeserialization(_)
            | Text2SqlError::AiApi { .. }
            | Text2SqlError::EmptyAiResponse
            | Text2SqlError::NoSqlInResponse(_) => ErrorKind::Upstream,
            Text2SqlError::SqlExecution { .. } | Text2SqlError::ReadOnlyViolation { .. } => {
                ErrorKind::SqlExecution
            }
            Text2SqlError::ReqwestClientBuild(_)
            | Text2SqlError::MissingAiProvider(_)
            | Text2SqlError::MissingApiKey(_)
            | Text2SqlError::StorageConnection(_) => ErrorKind::Internal,
        }
    }

    /// The offending SQL statement, for errors raised while executing one.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Text2SqlError::SqlExecution { sql, .. } | Text2SqlError::ReadOnlyViolation { sql } => {
                Some(sql)
            }
            _ => None,
        }
    }

    /// Maps a transport-level `reqwest` failure to the matching upstream variant.
    pub(crate) fn from_ai_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Text2SqlError::AiTimeout(err)
        } else {
            Text2SqlError::AiRequest(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_three_error_families() {
        assert_eq!(Text2SqlError::EmptyQuestion.kind(), ErrorKind::ClientInput);
        assert_eq!(Text2SqlError::EmptyAiResponse.kind(), ErrorKind::Upstream);
        assert_eq!(
            Text2SqlError::AiApi {
                status: 401,
                body: "bad key".into()
            }
            .kind(),
            ErrorKind::Upstream
        );
        let err = Text2SqlError::SqlExecution {
            sql: "SELECT nope FROM nowhere;".into(),
            message: "no such table: nowhere".into(),
        };
        assert_eq!(err.kind(), ErrorKind::SqlExecution);
        assert_eq!(err.sql(), Some("SELECT nope FROM nowhere;"));
        assert!(err.to_string().contains("SELECT nope FROM nowhere;"));
        assert_eq!(
            Text2SqlError::StorageConnection("disk".into()).kind(),
            ErrorKind::Internal
        );
    }
}
