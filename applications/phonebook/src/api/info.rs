/// Info page
use crate::{error::Result, state::AppState};
use axum::{extract::State, response::Html};
use chrono::Utc;
use fullstack_core::Repository;

/// GET /info - entry count and request time
pub async fn info(State(app_state): State<AppState>) -> Result<Html<String>> {
    let requested_at = Utc::now();
    let count = app_state.persons.count().await?;

    Ok(Html(format!(
        "<div>Phonebook has info for {} people</div><div>Request time: {}</div>",
        count,
        requested_at.to_rfc2822()
    )))
}
