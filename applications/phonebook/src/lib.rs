//! Phonebook Server Library
//!
//! Name and number directory with an info page and a bundled static
//! frontend. Name uniqueness is checked against the stored entries.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod frontend;
pub mod middleware;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router over the given state
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/persons",
            get(api::persons::list_persons).post(api::persons::create_person),
        )
        .route(
            "/persons/:id",
            get(api::persons::get_person)
                .put(api::persons::update_person)
                .delete(api::persons::delete_person),
        )
        .fallback(api::unknown_endpoint);

    Router::new()
        .route("/info", get(api::info::info))
        .nest("/api", api_routes)
        .fallback(frontend::serve_frontend)
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
