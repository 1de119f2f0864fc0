/// Static frontend serving
use crate::{api::unknown_endpoint, state::AppState};
use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

const LANDING_PAGE: &str = "<h1>Phonebook</h1>";

/// Fallback for every path outside `/api`
///
/// Existing files are served from the static directory. Other paths get
/// `index.html` so client-side routing works; without one, `/` answers with
/// a bare landing page and anything else is an unknown endpoint.
pub async fn serve_frontend(State(app_state): State<AppState>, req: Request) -> Response {
    let static_dir = app_state.static_dir.as_path();
    let relative = req.uri().path().trim_start_matches('/').to_string();

    if !relative.is_empty() && static_dir.join(&relative).is_file() {
        return match ServeDir::new(static_dir).oneshot(req).await {
            Ok(res) => res.into_response(),
            Err(never) => match never {},
        };
    }

    let index_path = static_dir.join("index.html");
    if index_path.is_file() {
        return match tokio::fs::read(&index_path).await {
            Ok(contents) => (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                contents,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to read {:?}: {}", index_path, e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        };
    }

    if relative.is_empty() {
        Html(LANDING_PAGE).into_response()
    } else {
        unknown_endpoint().await.into_response()
    }
}
