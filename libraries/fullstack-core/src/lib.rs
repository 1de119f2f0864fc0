//! Fullstack Core
//!
//! Shared domain types, storage traits, and error handling for the
//! phonebook and bloglist services.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Blog`, `User`, `Person` and their id newtypes
//! - **Storage Traits**: `Repository` over any `Document`
//! - **Statistics**: pure aggregations over a blog collection (`stats`)
//! - **Error Handling**: Unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use fullstack_core::{stats, Document};
//! use fullstack_core::types::{Blog, BlogId, CreateBlog, UserId};
//!
//! let owner = UserId::generate();
//! let draft = CreateBlog::new("Type-driven design", "Alexis", "https://example.com", owner)
//!     .with_likes(7);
//! let blog = Blog::from_draft(BlogId::generate(), draft, chrono::Utc::now());
//!
//! assert_eq!(stats::total_likes(&[blog]), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod stats;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, Result};
pub use storage::{Document, Repository};

pub use types::{
    // Blogs
    Blog, BlogId, CreateBlog, UpdateBlog,
    // Users
    CreateUser, User, UserId, UserPatch,
    // Phonebook
    CreatePerson, Person, PersonId, UpdatePerson,
};
