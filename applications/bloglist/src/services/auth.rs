/// Authentication service - bearer tokens, identity resolution, and password handling
use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use chrono::Utc;
use fullstack_core::{
    types::{Blog, User, UserId},
    CoreError, Repository,
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization token missing")]
    MissingToken,

    #[error("Authorization token is invalid: {0}")]
    InvalidToken(jsonwebtoken::errors::Error),

    #[error("Token refers to unknown user {0}")]
    UnknownUser(UserId),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("User lookup failed: {0}")]
    Lookup(#[from] CoreError),

    #[error("Token signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

/// Claims carried by a bearer token. There is no `exp`: a token stays
/// valid for as long as the signing secret does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    pub id: UserId,
    pub iat: i64,
}

/// Resolves a user id taken from a verified token
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn find_user(&self, id: UserId) -> fullstack_core::Result<Option<User>>;
}

#[async_trait]
impl UserLookup for Arc<dyn Repository<User>> {
    async fn find_user(&self, id: UserId) -> fullstack_core::Result<Option<User>> {
        self.find_by_id(id).await
    }
}

/// The user acting on a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: User,
}

impl Identity {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Denied,
}

/// Only the user who created a blog may delete it
pub fn authorize_delete(resource: &Blog, actor: &Identity) -> Authorization {
    if resource.user == actor.id() {
        Authorization::Authorized
    } else {
        Authorization::Denied
    }
}

/// Pull the raw token out of an `Authorization: Bearer <token>` header
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
}

pub struct AuthGuard {
    secret: String,
    bcrypt_cost: u32,
    users: Arc<dyn UserLookup>,
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGuard")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

impl AuthGuard {
    pub fn new(secret: impl Into<String>, users: Arc<dyn UserLookup>) -> Self {
        Self {
            secret: secret.into(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            users,
        }
    }

    /// Build a guard that resolves identities through a user repository
    pub fn with_repository(secret: impl Into<String>, users: Arc<dyn Repository<User>>) -> Self {
        Self::new(secret, Arc::new(users))
    }

    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        bcrypt::hash(password, self.bcrypt_cost).map_err(AuthError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        bcrypt::verify(password, hash).map_err(AuthError::from)
    }

    /// Issue a bearer token for a user
    pub fn issue_token(&self, user: &User) -> Result<String, AuthError> {
        self.encode_claims(&TokenClaims {
            username: user.username.clone(),
            id: user.id,
            iat: Utc::now().timestamp(),
        })
    }

    /// Sign a set of claims; identical claims produce identical tokens
    pub fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AuthError> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), claims, &encoding_key).map_err(AuthError::Signing)
    }

    /// Verify a token's signature and decode its claims
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let token_data =
            decode::<TokenClaims>(token, &decoding_key, &validation).map_err(AuthError::InvalidToken)?;
        Ok(token_data.claims)
    }

    /// Verify a token and load the user it names
    pub async fn resolve_identity(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.verify_token(token)?;
        let user = self
            .users
            .find_user(claims.id)
            .await?
            .ok_or(AuthError::UnknownUser(claims.id))?;

        Ok(Identity::new(user))
    }

    /// Check a username/password pair and issue a token on success
    pub async fn login(
        &self,
        users: &dyn Repository<User>,
        username: &str,
        password: &str,
    ) -> Result<(User, String), AuthError> {
        let user = users
            .find_one(&|u: &User| u.username == username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issue_token(&user)?;
        Ok((user, token))
    }
}
