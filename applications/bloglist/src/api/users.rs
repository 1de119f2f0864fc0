/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use fullstack_core::{
    types::{Blog, BlogId, CreateUser, User, UserId},
    CoreError, Repository,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 3;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Blog as listed under its owner
#[derive(Debug, Clone, Serialize)]
pub struct OwnedBlogView {
    pub id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

impl From<&Blog> for OwnedBlogView {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes,
        }
    }
}

/// User with their blogs populated
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub blogs: Vec<OwnedBlogView>,
}

/// GET /api/users
/// List all users with their blogs
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserView>>> {
    let users = app_state.users.find_all().await?;
    let blogs: HashMap<BlogId, Blog> = app_state
        .blogs
        .find_all()
        .await?
        .into_iter()
        .map(|b| (b.id, b))
        .collect();

    let views = users
        .into_iter()
        .map(|user| UserView {
            blogs: user
                .blogs
                .iter()
                .filter_map(|id| blogs.get(id))
                .map(OwnedBlogView::from)
                .collect(),
            id: user.id,
            username: user.username,
            name: user.name,
        })
        .collect();

    Ok(Json(views))
}

/// POST /api/users
/// Register a new user account
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(req) = payload?;

    let password = req.password.unwrap_or_default();
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ServerError::Validation(format!(
            "Password must be at least {} characters long.",
            MIN_PASSWORD_LEN
        )));
    }

    let mut draft = CreateUser {
        username: req.username.unwrap_or_default(),
        name: req.name.unwrap_or_default(),
        password_hash: String::new(),
    };
    draft.validate()?;
    draft.password_hash = app_state.auth.hash_password(&password)?;

    let username = draft.username.clone();
    let user = app_state
        .users
        .insert_unique(draft, &|u: &User| u.username == username)
        .await
        .map_err(|e| match e {
            CoreError::Duplicate(_) => ServerError::Duplicate(
                "User validation failed: username: expected `username` to be unique".to_string(),
            ),
            other => other.into(),
        })?;

    tracing::info!("Registered user {} ({})", user.username, user.id);
    Ok((StatusCode::CREATED, Json(user)))
}
