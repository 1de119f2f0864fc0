/// Blogs API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    services::auth::{authorize_delete, Authorization},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use fullstack_core::{
    types::{Blog, BlogId, CreateBlog, UpdateBlog, User, UserId, UserPatch},
    Repository,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

/// Blog owner as shown alongside a blog
#[derive(Debug, Clone, Serialize)]
pub struct OwnerView {
    pub id: UserId,
    pub username: String,
    pub name: String,
}

/// Blog with its owner populated
#[derive(Debug, Clone, Serialize)]
pub struct BlogView {
    pub id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub user: Option<OwnerView>,
}

impl BlogView {
    fn new(blog: Blog, owner: Option<&User>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user: owner.map(|u| OwnerView {
                id: u.id,
                username: u.username.clone(),
                name: u.name.clone(),
            }),
        }
    }
}

/// GET /api/blogs
/// List all blogs with their owners
pub async fn list_blogs(State(app_state): State<AppState>) -> Result<Json<Vec<BlogView>>> {
    let blogs = app_state.blogs.find_all().await?;
    let users: HashMap<UserId, User> = app_state
        .users
        .find_all()
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let views = blogs
        .into_iter()
        .map(|blog| {
            let owner = users.get(&blog.user);
            BlogView::new(blog, owner)
        })
        .collect();

    Ok(Json(views))
}

/// GET /api/blogs/:id
pub async fn get_blog(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<BlogView>> {
    let blog_id = BlogId::parse(&id)?;
    let blog = app_state
        .blogs
        .find_by_id(blog_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Blog not found".to_string()))?;
    let owner = app_state.users.find_by_id(blog.user).await?;

    Ok(Json(BlogView::new(blog, owner.as_ref())))
}

/// POST /api/blogs
/// Create a blog owned by the authenticated user
pub async fn create_blog(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    payload: std::result::Result<Json<CreateBlogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Blog>)> {
    let Json(req) = payload?;
    let owner = auth.identity().id();

    let draft = CreateBlog::new(
        req.title.unwrap_or_default(),
        req.author.unwrap_or_default(),
        req.url.unwrap_or_default(),
        owner,
    )
    .with_likes(req.likes.unwrap_or(0));
    draft.validate()?;

    let blog = app_state.blogs.insert(draft).await?;
    app_state
        .users
        .update_by_id(owner, UserPatch::AddBlog(blog.id))
        .await?;

    tracing::info!("User {} created blog {}", owner, blog.id);
    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/:id
/// Update title, author, url or likes; the owner never changes
pub async fn update_blog(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UpdateBlog>, JsonRejection>,
) -> Result<Json<Blog>> {
    let blog_id = BlogId::parse(&id)?;
    let Json(patch) = payload?;
    patch.validate()?;

    let blog = app_state
        .blogs
        .update_by_id(blog_id, patch)
        .await?
        .ok_or_else(|| ServerError::NotFound("Blog not found".to_string()))?;

    Ok(Json(blog))
}

/// DELETE /api/blogs/:id
/// Delete a blog; only its creator may do so
pub async fn delete_blog(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<StatusCode> {
    let blog_id = BlogId::parse(&id)?;
    let blog = app_state
        .blogs
        .find_by_id(blog_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Blog not found".to_string()))?;

    if authorize_delete(&blog, auth.identity()) == Authorization::Denied {
        tracing::warn!(
            "User {} tried to delete blog {} owned by {}",
            auth.identity().id(),
            blog.id,
            blog.user
        );
        return Err(ServerError::Unauthorized(
            "only the creator can delete a blog".to_string(),
        ));
    }

    app_state.blogs.delete_by_id(blog_id).await?;
    app_state
        .users
        .update_by_id(blog.user, UserPatch::RemoveBlog(blog_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
