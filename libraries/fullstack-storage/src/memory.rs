//! `RwLock`-guarded collections kept in insertion order

use async_trait::async_trait;
use chrono::Utc;
use fullstack_core::{
    error::{CoreError, Result},
    storage::{Document, Repository},
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A collection of documents held in memory
///
/// Cloning is cheap and shares the underlying data.
#[derive(Debug)]
pub struct MemoryCollection<D> {
    documents: Arc<RwLock<Vec<D>>>,
}

impl<D> Clone for MemoryCollection<D> {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
        }
    }
}

impl<D> Default for MemoryCollection<D> {
    fn default() -> Self {
        Self {
            documents: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<D: Document> MemoryCollection<D> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection pre-populated with stored documents
    pub fn with_documents(documents: Vec<D>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
        }
    }

}

#[async_trait]
impl<D: Document> Repository<D> for MemoryCollection<D> {
    async fn find(&self, filter: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync)) -> Result<Vec<D>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().filter(|d| filter(d)).cloned().collect())
    }

    async fn find_by_id(&self, id: D::Id) -> Result<Option<D>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id() == id).cloned())
    }

    async fn insert(&self, draft: D::Draft) -> Result<D> {
        let document = D::from_draft(Uuid::new_v4().into(), draft, Utc::now());
        self.documents.write().await.push(document.clone());

        tracing::debug!("Inserted {} {}", D::ENTITY, document.id());
        Ok(document)
    }

    async fn insert_unique(
        &self,
        draft: D::Draft,
        conflict: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync),
    ) -> Result<D> {
        let mut documents = self.documents.write().await;
        if documents.iter().any(|d| conflict(d)) {
            return Err(duplicate::<D>());
        }

        let document = D::from_draft(Uuid::new_v4().into(), draft, Utc::now());
        documents.push(document.clone());

        tracing::debug!("Inserted {} {}", D::ENTITY, document.id());
        Ok(document)
    }

    async fn update_by_id(&self, id: D::Id, patch: D::Patch) -> Result<Option<D>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.iter_mut().find(|d| d.id() == id) else {
            return Ok(None);
        };

        document.apply_patch(patch, Utc::now());
        Ok(Some(document.clone()))
    }

    async fn update_unique(
        &self,
        id: D::Id,
        patch: D::Patch,
        conflict: &(dyn for<'a> Fn(&'a D) -> bool + Send + Sync),
    ) -> Result<Option<D>> {
        let mut documents = self.documents.write().await;
        let Some(index) = documents.iter().position(|d| d.id() == id) else {
            return Ok(None);
        };

        if documents
            .iter()
            .enumerate()
            .any(|(i, d)| i != index && conflict(d))
        {
            return Err(duplicate::<D>());
        }

        let document = &mut documents[index];
        document.apply_patch(patch, Utc::now());
        Ok(Some(document.clone()))
    }

    async fn delete_by_id(&self, id: D::Id) -> Result<Option<D>> {
        let mut documents = self.documents.write().await;
        let removed = documents
            .iter()
            .position(|d| d.id() == id)
            .map(|index| documents.remove(index));

        if removed.is_some() {
            tracing::debug!("Deleted {} {}", D::ENTITY, id);
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.documents.read().await.len())
    }
}

fn duplicate<D: Document>() -> CoreError {
    CoreError::duplicate(format!("{} already exists", D::ENTITY))
}
