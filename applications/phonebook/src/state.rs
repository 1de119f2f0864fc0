/// Shared application state
use fullstack_core::{types::Person, Repository};
use fullstack_storage::MemoryCollection;
use std::{path::PathBuf, sync::Arc};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<dyn Repository<Person>>,
    pub static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(persons: Arc<dyn Repository<Person>>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            persons,
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// State backed by a fresh in-memory collection
    pub fn in_memory(static_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(MemoryCollection::<Person>::new()), static_dir)
    }
}
