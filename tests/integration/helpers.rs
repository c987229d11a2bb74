//! Shared test helpers for integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use boxoffice_api::{AppState, build_app};
use boxoffice_core::config::{AppConfig, Argon2Config, DatabaseProvider};
use boxoffice_database::Stores;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct assertions
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

/// Configuration for an isolated in-memory server with cheap hashing.
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.database.provider = DatabaseProvider::Memory;
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.argon2 = Argon2Config {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    };
    config
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let stores = Stores::memory();
        let state =
            AppState::new(config.clone(), stores.clone()).expect("Failed to build app state");

        Self {
            router: build_app(state),
            stores,
            config,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a fully built request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Register an account through the API.
    pub async fn register(&self, username: &str, password: &str, is_admin: bool) -> TestResponse {
        self.request(
            "POST",
            "/auth/register",
            Some(json!({
                "username": username,
                "password": password,
                "is_admin": is_admin,
            })),
            None,
        )
        .await
    }

    /// Login and return the access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Register then log in, returning a token.
    pub async fn token_for(&self, username: &str, is_admin: bool) -> String {
        let password = format!("{username}-password");
        let response = self.register(username, &password, is_admin).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        self.login(username, &password).await
    }

    /// Create a movie as `token` and return its id.
    pub async fn create_movie(&self, token: &str, title: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/admin/movies",
                Some(json!({
                    "title": title,
                    "description": format!("About {title}"),
                    "showtime": "2030-03-01T19:30:00Z",
                })),
                Some(token),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["movie"]["id"]
            .as_i64()
            .expect("No movie id in response")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when empty)
    pub body: Value,
}

impl TestResponse {
    /// The `message` field of the body.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
