/// Blog statistics API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use fullstack_core::{
    stats::{self, AuthorBlogs, AuthorLikes, BlogSummary, FavoriteBlog},
    Repository,
};

/// GET /api/blogs/stats
/// All statistics in one response; works on an empty collection
pub async fn summary(State(app_state): State<AppState>) -> Result<Json<BlogSummary>> {
    let blogs = app_state.blogs.find_all().await?;
    Ok(Json(stats::summarize(&blogs)))
}

/// GET /api/blogs/stats/favorite
pub async fn favorite(State(app_state): State<AppState>) -> Result<Json<FavoriteBlog>> {
    let blogs = app_state.blogs.find_all().await?;
    Ok(Json(stats::favorite_blog(&blogs)?))
}

/// GET /api/blogs/stats/most-blogs
pub async fn most_blogs(State(app_state): State<AppState>) -> Result<Json<AuthorBlogs>> {
    let blogs = app_state.blogs.find_all().await?;
    Ok(Json(stats::most_blogs(&blogs)?))
}

/// GET /api/blogs/stats/most-likes
pub async fn most_likes(State(app_state): State<AppState>) -> Result<Json<AuthorLikes>> {
    let blogs = app_state.blogs.find_all().await?;
    Ok(Json(stats::most_likes(&blogs)?))
}
