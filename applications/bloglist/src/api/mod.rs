/// API route modules
pub mod blogs;
pub mod health;
pub mod login;
pub mod stats;
pub mod users;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Fallback for paths no route matches
pub async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
