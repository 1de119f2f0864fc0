//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fullstack_core::{
    types::{CreatePerson, Person},
    Repository,
};
use phonebook_server::{create_router, AppState};
use serde_json::Value;
use std::path::Path;
use tower::util::ServiceExt;

/// Router plus the state behind it, for seeding and inspection
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

/// Create an app over an empty collection and the given static directory
pub fn create_test_app_with_static(static_dir: &Path) -> TestApp {
    let state = AppState::in_memory(static_dir);
    TestApp {
        router: create_router(state.clone()),
        state,
    }
}

/// Create an app whose static directory does not exist
pub fn create_test_app() -> TestApp {
    create_test_app_with_static(Path::new("/nonexistent/phonebook-dist"))
}

impl TestApp {
    /// Store an entry directly, bypassing the API
    pub async fn seed_person(&self, name: &str, number: &str) -> Person {
        self.state
            .persons
            .insert(CreatePerson {
                name: name.to_string(),
                number: number.to_string(),
            })
            .await
            .unwrap()
    }

    /// Send a request and return the status and raw body
    pub async fn send_raw(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body_bytes.to_vec()).unwrap())
    }

    /// Send a request and decode the JSON body (`Null` when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let (status, text) = self.send_raw(request).await;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(request(Method::GET, uri, None)).await
    }
}

/// Build a request with an optional JSON body
pub fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
