//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bloglist_server::{create_router, AppState};
use fullstack_core::{
    types::{Blog, CreateBlog, CreateUser, User, UserPatch},
    Repository,
};
use serde_json::Value;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "TESTSECRET";

/// Router plus the state behind it, for seeding and inspection
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Create an app over empty in-memory collections
pub fn create_test_app() -> TestApp {
    // Lowest bcrypt cost keeps the suite fast
    let state = AppState::in_memory(TEST_SECRET, 4);
    TestApp {
        router: create_router(state.clone()),
        state,
    }
}

impl TestApp {
    /// Store a user directly, bypassing the API
    pub async fn seed_user(&self, username: &str, password: &str) -> User {
        let password_hash = self.state.auth.hash_password(password).unwrap();
        self.state
            .users
            .insert(CreateUser {
                username: username.to_string(),
                name: format!("{} name", username),
                password_hash,
            })
            .await
            .unwrap()
    }

    /// Store a blog owned by `owner`, bypassing the API
    pub async fn seed_blog(&self, owner: &User, title: &str, author: &str, likes: u64) -> Blog {
        let draft = CreateBlog::new(title, author, format!("https://{}.example", likes), owner.id)
            .with_likes(likes);
        let blog = self.state.blogs.insert(draft).await.unwrap();
        self.state
            .users
            .update_by_id(owner.id, UserPatch::AddBlog(blog.id))
            .await
            .unwrap();
        blog
    }

    /// `Authorization` header value for a user
    pub fn bearer(&self, user: &User) -> String {
        format!("Bearer {}", self.state.auth.issue_token(user).unwrap())
    }

    /// Send a request and decode the JSON body (`Null` when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, None, None)).await
    }
}

/// Build a request with optional bearer header and JSON body
pub fn request(method: Method, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
