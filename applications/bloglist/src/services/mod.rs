/// Server services
pub mod auth;

pub use auth::{AuthError, AuthGuard, Authorization, Identity, UserLookup};
