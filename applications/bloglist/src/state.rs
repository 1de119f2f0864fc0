/// Shared application state
use crate::services::AuthGuard;
use fullstack_core::{
    types::{Blog, User},
    Repository,
};
use fullstack_storage::MemoryCollection;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn Repository<Blog>>,
    pub users: Arc<dyn Repository<User>>,
    pub auth: Arc<AuthGuard>,
}

impl AppState {
    pub fn new(
        blogs: Arc<dyn Repository<Blog>>,
        users: Arc<dyn Repository<User>>,
        auth: Arc<AuthGuard>,
    ) -> Self {
        Self { blogs, users, auth }
    }

    /// State backed by fresh in-memory collections
    pub fn in_memory(jwt_secret: &str, bcrypt_cost: u32) -> Self {
        let blogs: Arc<dyn Repository<Blog>> = Arc::new(MemoryCollection::<Blog>::new());
        let users: Arc<dyn Repository<User>> = Arc::new(MemoryCollection::<User>::new());
        let auth = AuthGuard::with_repository(jwt_secret, Arc::clone(&users))
            .with_bcrypt_cost(bcrypt_cost);

        Self::new(blogs, users, Arc::new(auth))
    }
}
