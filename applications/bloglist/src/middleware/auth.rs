/// Authentication extractor
use crate::{
    error::ServerError,
    services::auth::{extract_token, AuthError, Identity},
    state::AppState,
};
use axum::{extract::FromRequestParts, http::request::Parts};

/// The verified identity behind a request's bearer token
///
/// Handlers that take this extractor reject the request with 401 when the
/// token is missing, does not verify, or names a user that no longer exists.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

impl AuthenticatedUser {
    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers).ok_or_else(|| {
            tracing::warn!("Rejected {} {}: no bearer token", parts.method, parts.uri.path());
            AuthError::MissingToken
        })?;

        let identity = state.auth.resolve_identity(token).await.map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            e
        })?;

        Ok(Self(identity))
    }
}
