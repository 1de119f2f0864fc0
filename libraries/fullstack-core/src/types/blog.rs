/// Blog domain types
use crate::{
    error::{CoreError, Result},
    storage::Document,
    types::{BlogId, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    /// Unique blog identifier
    pub id: BlogId,

    /// Blog title
    pub title: String,

    /// Author name as written by the submitter
    pub author: String,

    /// Link to the blog
    pub url: String,

    /// Number of likes
    pub likes: u64,

    /// User who created the entry; never changes after creation
    pub user: UserId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new blog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBlog {
    /// Title, required
    pub title: String,
    /// Author name
    pub author: String,
    /// Link to the blog, required
    pub url: String,
    /// Initial like count
    pub likes: u64,
    /// Creating user, who owns the blog
    pub user: UserId,
}

impl CreateBlog {
    /// Create a draft with zero likes
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        user: UserId,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes: 0,
            user,
        }
    }

    /// Set the initial like count
    #[must_use]
    pub fn with_likes(mut self, likes: u64) -> Self {
        self.likes = likes;
        self
    }

    /// Check that title and url are present
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("Blog validation failed: title is required"));
        }
        if self.url.trim().is_empty() {
            return Err(CoreError::validation("Blog validation failed: url is required"));
        }
        Ok(())
    }
}

/// Partial update for a blog entry; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateBlog {
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New author
    #[serde(default)]
    pub author: Option<String>,
    /// New url
    #[serde(default)]
    pub url: Option<String>,
    /// New like count
    #[serde(default)]
    pub likes: Option<u64>,
}

impl UpdateBlog {
    /// Reject updates that would blank out a required field
    pub fn validate(&self) -> Result<()> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::validation("Blog validation failed: title is required"));
        }
        if self.url.as_deref().is_some_and(|u| u.trim().is_empty()) {
            return Err(CoreError::validation("Blog validation failed: url is required"));
        }
        Ok(())
    }
}

impl Document for Blog {
    type Id = BlogId;
    type Draft = CreateBlog;
    type Patch = UpdateBlog;

    const ENTITY: &'static str = "blog";

    fn id(&self) -> BlogId {
        self.id
    }

    fn from_draft(id: BlogId, draft: CreateBlog, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            url: draft.url,
            likes: draft.likes,
            user: draft.user,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UpdateBlog, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(likes) = patch.likes {
            self.likes = likes;
        }
        self.updated_at = now;
    }
}
