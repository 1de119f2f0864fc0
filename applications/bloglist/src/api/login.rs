/// Login API route
use crate::{error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}

/// POST /api/login
pub async fn login(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>> {
    let Json(req) = payload?;

    let (user, token) = app_state
        .auth
        .login(app_state.users.as_ref(), &req.username, &req.password)
        .await
        .map_err(|e| {
            tracing::info!("Login failed for {}: {}", req.username, e);
            e
        })?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}
