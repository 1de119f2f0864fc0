/// User domain types
use crate::{
    error::{CoreError, Result},
    storage::Document,
    types::{BlogId, UserId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum length for usernames
pub const MIN_USERNAME_LEN: usize = 3;

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across users
    pub username: String,

    /// Display name
    pub name: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Blogs created by this user
    pub blogs: Vec<BlogId>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Login name
    pub username: String,
    /// Display name
    pub name: String,
    /// Bcrypt hash, never the plain password
    pub password_hash: String,
}

impl CreateUser {
    /// Check the username shape
    pub fn validate(&self) -> Result<()> {
        if self.username.chars().count() < MIN_USERNAME_LEN {
            return Err(CoreError::validation(format!(
                "User validation failed: username: must be at least {} characters long",
                MIN_USERNAME_LEN
            )));
        }
        Ok(())
    }
}

/// Change to a user's blog list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserPatch {
    /// Record a newly created blog
    AddBlog(BlogId),
    /// Forget a deleted blog
    RemoveBlog(BlogId),
}

impl Document for User {
    type Id = UserId;
    type Draft = CreateUser;
    type Patch = UserPatch;

    const ENTITY: &'static str = "user";

    fn id(&self) -> UserId {
        self.id
    }

    fn from_draft(id: UserId, draft: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: draft.username,
            name: draft.name,
            password_hash: draft.password_hash,
            blogs: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: UserPatch, now: DateTime<Utc>) {
        match patch {
            UserPatch::AddBlog(blog_id) => {
                if !self.blogs.contains(&blog_id) {
                    self.blogs.push(blog_id);
                }
            }
            UserPatch::RemoveBlog(blog_id) => self.blogs.retain(|id| *id != blog_id),
        }
        self.updated_at = now;
    }
}
