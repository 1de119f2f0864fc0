/// Server error types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fullstack_core::CoreError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Malformatted id: {0}")]
    MalformedId(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => ServerError::Validation(msg),
            CoreError::Duplicate(msg) => ServerError::Duplicate(msg),
            CoreError::NotFound { entity, id } => {
                ServerError::NotFound(format!("{} {} not found", entity, id))
            }
            CoreError::MalformedId { id, .. } => ServerError::MalformedId(id),
            // The phonebook never aggregates
            CoreError::EmptyInput => ServerError::Internal(CoreError::EmptyInput.to_string()),
            CoreError::Storage(msg) => ServerError::Storage(msg),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Validation(msg)
            | ServerError::Duplicate(msg)
            | ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::MalformedId(_) => (StatusCode::BAD_REQUEST, "Malformatted ID".to_string()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Storage(ref msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let status = |err: CoreError| ServerError::from(err).into_response().status();

        assert_eq!(status(CoreError::validation("short")), StatusCode::BAD_REQUEST);
        assert_eq!(status(CoreError::duplicate("taken")), StatusCode::BAD_REQUEST);
        assert_eq!(status(CoreError::malformed_id("person", "1")), StatusCode::BAD_REQUEST);
        assert_eq!(status(CoreError::not_found("person", "1")), StatusCode::NOT_FOUND);
        assert_eq!(status(CoreError::storage("lock")), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
