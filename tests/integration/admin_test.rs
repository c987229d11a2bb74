//! Integration tests for the admin catalog endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::json;

use boxoffice_auth::JwtEncoder;
use boxoffice_core::types::UserId;

fn dune() -> serde_json::Value {
    json!({
        "title": "Dune",
        "description": "Sci-fi",
        "showtime": "2030-03-01T19:30:00Z",
    })
}

#[tokio::test]
async fn test_admin_creates_movie() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;

    let response = app
        .request("POST", "/admin/movies", Some(dune()), Some(&admin))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.message(), "Movie added successfully");
    let movie = &response.body["movie"];
    assert_eq!(movie["title"], "Dune");
    assert_eq!(movie["description"], "Sci-fi");
    assert_eq!(movie["showtime"], "2030-03-01T19:30:00Z");
    assert!(movie["id"].is_i64());
}

#[tokio::test]
async fn test_non_admin_cannot_create_movie() {
    let app = helpers::TestApp::new();
    let user = app.token_for("alice", false).await;

    let forbidden = app
        .request("POST", "/admin/movies", Some(dune()), Some(&user))
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);
    assert_eq!(forbidden.message(), "Only Admin Can Perform This Action");

    let anonymous = app.request("POST", "/admin/movies", Some(dune()), None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    assert!(app.stores.movies.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_every_admin_route_is_forbidden_to_users() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    let routes = [
        ("GET", "/admin/movies".to_string(), None),
        ("PUT", format!("/admin/movies/{id}"), Some(dune())),
        ("DELETE", format!("/admin/movies/{id}"), None),
        ("GET", "/admin/bookings".to_string(), None),
    ];

    for (method, path, body) in routes {
        let response = app.request(method, &path, body, Some(&user)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
    }
    assert_eq!(app.stores.movies.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_expired_admin_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let encoder = JwtEncoder::new(&app.config.auth).unwrap();
    let expired = encoder
        .issue("root", UserId::new(1), true, Duration::seconds(-60))
        .unwrap();

    let response = app
        .request("GET", "/admin/movies", None, Some(&expired.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Login Required");
}

#[tokio::test]
async fn test_create_movie_validation() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;

    let bodies = [
        json!({ "title": "", "description": "Sci-fi", "showtime": "2030-03-01T19:30:00Z" }),
        json!({ "title": "Dune", "description": null, "showtime": "2030-03-01T19:30:00Z" }),
        json!({ "title": "Dune", "description": "Sci-fi" }),
        json!({ "title": "Dune", "description": "Sci-fi", "showtime": "next tuesday" }),
    ];

    for body in bodies {
        let response = app
            .request("POST", "/admin/movies", Some(body.clone()), Some(&admin))
            .await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
    }
    assert!(app.stores.movies.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_naive_showtime_is_utc() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;

    let response = app
        .request(
            "POST",
            "/admin/movies",
            Some(json!({
                "title": "Heat",
                "description": "Crime",
                "showtime": "2030-06-01 21:00:00",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["movie"]["showtime"], "2030-06-01T21:00:00Z");
}

#[tokio::test]
async fn test_list_movies_in_insertion_order() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    app.create_movie(&admin, "Dune").await;
    app.create_movie(&admin, "Heat").await;
    app.create_movie(&admin, "Dune").await;

    let response = app.request("GET", "/admin/movies", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);

    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Dune", "Heat", "Dune"]);
}

#[tokio::test]
async fn test_update_movie() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let id = app.create_movie(&admin, "Dune").await;

    let response = app
        .request(
            "PUT",
            &format!("/admin/movies/{id}"),
            Some(json!({
                "title": "Dune: Part Two",
                "description": "More sand",
                "showtime": "2031-01-01T12:00:00Z",
            })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.message(), "Movie Updated Successfully");
    assert_eq!(response.body["movie"]["id"], json!(id));
    assert_eq!(response.body["movie"]["title"], "Dune: Part Two");
    assert_eq!(response.body["movie"]["showtime"], "2031-01-01T12:00:00Z");

    let missing = app
        .request("PUT", "/admin/movies/9999", Some(dune()), Some(&admin))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.message(), "Movie not found");
}

#[tokio::test]
async fn test_delete_movie() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let id = app.create_movie(&admin, "Dune").await;

    let response = app
        .request("DELETE", &format!("/admin/movies/{id}"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(app.stores.movies.find_all().await.unwrap().is_empty());

    let again = app
        .request("DELETE", &format!("/admin/movies/{id}"), None, Some(&admin))
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let bad_id = app
        .request("DELETE", "/admin/movies/abc", None, Some(&admin))
        .await;
    assert_eq!(bad_id.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_all_bookings() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let alice = app.token_for("alice", false).await;
    let bob = app.token_for("bob", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    for token in [&alice, &bob] {
        let response = app
            .request("POST", &format!("/movies/{id}/book"), None, Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.request("GET", "/admin/bookings", None, Some(&admin)).await;
    assert_eq!(response.status, StatusCode::OK);
    let bookings = response.body.as_array().unwrap();
    assert_eq!(bookings.len(), 2);
    assert!(bookings.iter().all(|b| b["movie_id"] == json!(id)));
}
