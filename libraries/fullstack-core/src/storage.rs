//! Storage traits for document collections

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// A record kept in a document collection
///
/// The store owns id and timestamp assignment: callers hand over a
/// `Draft` and receive the stored document back.
pub trait Document: Clone + Send + Sync + 'static {
    /// Identifier type assigned by the store
    type Id: Copy + Eq + fmt::Display + From<Uuid> + Send + Sync + 'static;

    /// Fields supplied by the caller on insert
    type Draft: Send + 'static;

    /// Change applied by `update_by_id`
    type Patch: Send + 'static;

    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// Get the document id
    fn id(&self) -> Self::Id;

    /// Build a stored document from its draft
    fn from_draft(id: Self::Id, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Apply a patch in place
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

/// Collection of documents of a single kind
///
/// Implementations preserve insertion order for `find`.
#[async_trait]
pub trait Repository<D: Document>: Send + Sync {
    /// Get every document matching `filter`
    async fn find(&self, filter: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync)) -> Result<Vec<D>>;

    /// Get document by ID
    async fn find_by_id(&self, id: D::Id) -> Result<Option<D>>;

    /// Insert a new document, assigning its id and timestamps
    async fn insert(&self, draft: D::Draft) -> Result<D>;

    /// Insert a new document unless a stored one matches `conflict`
    ///
    /// The check and the insert happen as one step, so two concurrent
    /// callers can never both succeed. Fails with `CoreError::Duplicate`.
    async fn insert_unique(
        &self,
        draft: D::Draft,
        conflict: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync),
    ) -> Result<D>;

    /// Patch a document, returning the updated version
    async fn update_by_id(&self, id: D::Id, patch: D::Patch) -> Result<Option<D>>;

    /// Patch a document unless another stored one matches `conflict`
    ///
    /// The document being patched is never tested against `conflict`.
    /// Atomic in the same way as `insert_unique`.
    async fn update_unique(
        &self,
        id: D::Id,
        patch: D::Patch,
        conflict: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync),
    ) -> Result<Option<D>>;

    /// Remove a document, returning what was removed
    async fn delete_by_id(&self, id: D::Id) -> Result<Option<D>>;

    /// Get all documents
    async fn find_all(&self) -> Result<Vec<D>> {
        self.find(&|_: &D| true).await
    }

    /// Get the first document matching `filter`
    async fn find_one(&self, filter: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync)) -> Result<Option<D>> {
        Ok(self.find(filter).await?.into_iter().next())
    }

    /// Count stored documents
    async fn count(&self) -> Result<usize> {
        Ok(self.find_all().await?.len())
    }
}
