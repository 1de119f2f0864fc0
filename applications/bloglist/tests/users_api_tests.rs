/// User registration and login tests
mod common;

use axum::http::{Method, StatusCode};
use common::{create_test_app, request};
use fullstack_core::Repository;
use serde_json::json;

/// Test a valid user can be registered and the hash is never exposed
#[tokio::test]
async fn test_create_user() {
    let app = create_test_app();

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "mluukkai", "name": "Matti Luukkainen", "password": "salainen" })),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "mluukkai");
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());

    let stored = app.state.users.find_all().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].password_hash.starts_with("$2"));
}

/// Test short password or username are rejected
#[tokio::test]
async fn test_create_user_with_wrong_username_or_password() {
    let app = create_test_app();

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "TestUsername", "name": "Test", "password": "T" })),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Password must be at least 3 characters long."));

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "T", "name": "Test", "password": "TestPassword" })),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("User validation failed: username:"));

    assert_eq!(app.state.users.count().await.unwrap(), 0);
}

/// Test duplicate usernames are rejected through the stored collection
#[tokio::test]
async fn test_duplicate_username_is_rejected() {
    let app = create_test_app();
    app.seed_user("root", "sekret").await;

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "root", "name": "Again", "password": "another" })),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("unique"));
    assert_eq!(app.state.users.count().await.unwrap(), 1);
}

/// Test GET /api/users lists users with their blogs populated
#[tokio::test]
async fn test_list_users_with_blogs() {
    let app = create_test_app();
    let owner = app.seed_user("root", "sekret").await;
    app.seed_user("idle", "sekret").await;
    app.seed_blog(&owner, "Populated", "Anna", 3).await;

    let (status, body) = app.get("/api/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["blogs"][0]["title"], "Populated");
    assert_eq!(users[0]["blogs"][0]["likes"], 3);
    assert_eq!(users[1]["blogs"], json!([]));
}

/// Test login flow and token usage
#[tokio::test]
async fn test_login_flow() {
    let app = create_test_app();
    app.seed_user("root", "sekret").await;

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/login",
            None,
            Some(json!({ "username": "root", "password": "sekret" })),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "root");
    assert_eq!(body["name"], "root name");
    let token = body["token"].as_str().unwrap();

    // The token verifies against the configured secret and creates blogs
    let claims = app.state.auth.verify_token(token).unwrap();
    assert_eq!(claims.username, "root");

    let (status, _) = app
        .send(request(
            Method::POST,
            "/api/blogs",
            Some(&format!("Bearer {}", token)),
            Some(json!({ "title": "Logged in", "url": "https://in.example" })),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Test login with bad credentials
#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = create_test_app();
    app.seed_user("root", "sekret").await;

    for (username, password) in [("root", "wrong"), ("nobody", "sekret")] {
        let (status, body) = app
            .send(request(
                Method::POST,
                "/api/login",
                None,
                Some(json!({ "username": username, "password": password })),
            ))
            .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "invalid username or password");
    }
}

/// Test a malformed JSON body maps to 400
#[tokio::test]
async fn test_login_with_malformed_body() {
    let app = create_test_app();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/login")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Test simultaneous registrations of one username store a single user
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registrations_keep_username_unique() {
    use tower::util::ServiceExt;

    let app = create_test_app();

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let router = app.router.clone();
            let body = json!({ "username": "root", "name": "Racer", "password": format!("secret{}", i) });
            tokio::spawn(async move {
                router
                    .oneshot(request(Method::POST, "/api/users", None, Some(body)))
                    .await
                    .unwrap()
                    .status()
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for task in tasks {
        statuses.push(task.await.unwrap());
    }

    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    assert_eq!(created, 1, "statuses: {:?}", statuses);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::BAD_REQUEST));

    let named_root = app
        .state
        .users
        .find(&|u: &fullstack_core::types::User| u.username == "root")
        .await
        .unwrap();
    assert_eq!(named_root.len(), 1);
}

/// Test a missing display name is stored as given, not derived
#[tokio::test]
async fn test_create_user_without_name() {
    let app = create_test_app();

    let (status, body) = app
        .send(request(
            Method::POST,
            "/api/users",
            None,
            Some(json!({ "username": "anonymous", "password": "salainen" })),
        ))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "");
}
