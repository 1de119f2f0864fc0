/// Server error types
use crate::services::auth::AuthError;
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

    #[error("Nothing to aggregate")]
    EmptyInput,

    #[error("Authentication failed: {0}")]
    Unauthenticated(String),

    #[error("Authorization failed: {0}")]
    Unauthorized(String),

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
            CoreError::EmptyInput => ServerError::EmptyInput,
            CoreError::Storage(msg) => ServerError::Storage(msg),
        }
    }
}

impl From<AuthError> for ServerError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken | AuthError::InvalidToken(_) | AuthError::UnknownUser(_) => {
                ServerError::Unauthenticated("token missing or invalid".to_string())
            }
            AuthError::InvalidCredentials => {
                ServerError::Unauthenticated("invalid username or password".to_string())
            }
            AuthError::Lookup(e) => e.into(),
            AuthError::Signing(e) => ServerError::Internal(format!("token signing: {}", e)),
            AuthError::Hashing(e) => ServerError::Internal(format!("password hashing: {}", e)),
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
            ServerError::MalformedId(_) => (StatusCode::BAD_REQUEST, "malformatted id".to_string()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::EmptyInput => (StatusCode::NOT_FOUND, "no blogs to aggregate".to_string()),
            ServerError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::Unauthorized(msg) => (StatusCode::FORBIDDEN, msg),
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

    fn status_of(err: impl Into<ServerError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn core_errors_map_to_client_statuses() {
        assert_eq!(status_of(CoreError::validation("title missing")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::duplicate("taken")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::malformed_id("blog", "5")), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::not_found("blog", "x")), StatusCode::NOT_FOUND);
        assert_eq!(status_of(CoreError::EmptyInput), StatusCode::NOT_FOUND);
        assert_eq!(status_of(CoreError::storage("disk")), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthenticated_and_unauthorized_are_distinct() {
        assert_eq!(status_of(AuthError::MissingToken), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(ServerError::Unauthorized("not the owner".to_string())),
            StatusCode::FORBIDDEN
        );
    }
}
