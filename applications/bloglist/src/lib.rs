//! Bloglist Server Library
//!
//! Blog listing service with token authentication, ownership-checked
//! deletes, and aggregate statistics over the stored blogs.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{AuthError, AuthGuard};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the HTTP router over the given state
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Blogs
        .route(
            "/blogs",
            get(api::blogs::list_blogs).post(api::blogs::create_blog),
        )
        .route(
            "/blogs/:id",
            get(api::blogs::get_blog)
                .put(api::blogs::update_blog)
                .delete(api::blogs::delete_blog),
        )
        // Statistics
        .route("/blogs/stats", get(api::stats::summary))
        .route("/blogs/stats/favorite", get(api::stats::favorite))
        .route("/blogs/stats/most-blogs", get(api::stats::most_blogs))
        .route("/blogs/stats/most-likes", get(api::stats::most_likes))
        // Users
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/login", post(api::login::login));

    Router::new()
        .nest("/api", api_routes)
        .fallback(api::unknown_endpoint)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
