//! Integration tests for registration, login, and bearer authentication.

mod helpers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use boxoffice_auth::{AccessGate, JwtDecoder};

#[tokio::test]
async fn test_register_returns_created() {
    let app = helpers::TestApp::new();

    let response = app.register("alice", "secret", false).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "User created successfully");
    assert_eq!(response.body["is_admin"], json!(false));

    let response = app.register("root", "secret", true).await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["is_admin"], json!(true));
}

#[tokio::test]
async fn test_register_defaults_to_regular_user() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "username": "alice", "password": "secret" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["is_admin"], json!(false));
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let app = helpers::TestApp::new();
    app.register("alice", "one", false).await;

    let response = app.register("alice", "two", false).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "Username already exists");
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new();

    let empty = app.register("", "secret", false).await;
    assert_eq!(empty.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(empty.body["error"], "VALIDATION_ERROR");

    let missing = app
        .request("POST", "/auth/register", Some(json!({ "username": "bob" })), None)
        .await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);

    let malformed = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/auth/register")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await;
    assert_eq!(malformed.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_admin_self_registration_disabled() {
    let mut config = helpers::test_config();
    config.auth.allow_admin_registration = false;
    let app = helpers::TestApp::with_config(config);

    let response = app.register("root", "secret", true).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert!(app.stores.users.find_by_username("root").await.unwrap().is_none());
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.register("alice", "secret", false).await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "username": "alice", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Logged In Successfully");
    assert_eq!(response.body["token_type"], "bearer");
    assert!(response.body["expires_at"].is_string());

    // The token names the user that was just created.
    let token = response.body["access_token"].as_str().unwrap();
    let user = app.stores.users.find_by_username("alice").await.unwrap().unwrap();
    let gate = AccessGate::new(Arc::new(JwtDecoder::new(&app.config.auth).unwrap()));
    let identity = gate.authenticate(token).unwrap();
    assert_eq!(identity.user_id(), user.id);
    assert_eq!(identity.username(), "alice");
}

#[tokio::test]
async fn test_login_with_form_body() {
    let app = helpers::TestApp::new();
    app.register("alice", "pw", false).await;

    let form = |body: &'static str| {
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    };

    let ok = app.send(form("username=alice&password=pw")).await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.message(), "Logged In Successfully");
    assert_eq!(ok.body["token_type"], "bearer");

    // The token from a form login opens gated routes like any other.
    let token = ok.body["access_token"].as_str().unwrap();
    let movies = app.request("GET", "/movies", None, Some(token)).await;
    assert_eq!(movies.status, StatusCode::OK);

    let wrong = app.send(form("username=alice&password=nope")).await;
    assert_eq!(wrong.status, StatusCode::NOT_FOUND);
    assert_eq!(wrong.message(), "Invalid Username Or Password");

    let missing = app.send(form("username=alice")).await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = helpers::TestApp::new();
    app.register("alice", "secret", false).await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "username": "alice", "password": "nope" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "username": "mallory", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::NOT_FOUND);
    assert_eq!(wrong_password.status, unknown_user.status);
    assert_eq!(wrong_password.body, unknown_user.body);
    assert_eq!(wrong_password.message(), "Invalid Username Or Password");
}

#[tokio::test]
async fn test_gated_route_requires_token() {
    let app = helpers::TestApp::new();

    let missing = app.request("GET", "/movies", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.message(), "Login Required");

    let garbage = app.request("GET", "/movies", None, Some("not.a.token")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.message(), "Login Required");

    let wrong_scheme = app
        .send(
            Request::builder()
                .uri("/movies")
                .header("Authorization", "Basic YWxpY2U6c2VjcmV0")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(wrong_scheme.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_request_id_header() {
    let app = helpers::TestApp::new();

    let generated = app.request("GET", "/health", None, None).await;
    assert_eq!(generated.status, StatusCode::OK);
    assert!(generated.headers.contains_key("x-request-id"));

    let echoed = app
        .send(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(echoed.headers["x-request-id"], "trace-123");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = helpers::TestApp::new();

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");
    assert!(health.body["version"].is_string());

    let ready = app.request("GET", "/health/ready", None, None).await;
    assert_eq!(ready.status, StatusCode::OK);
    assert_eq!(ready.body["database"], "connected");
}
