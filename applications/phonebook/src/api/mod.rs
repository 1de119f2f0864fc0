/// API route modules
pub mod info;
pub mod persons;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Fallback for `/api` paths no route matches
pub async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
