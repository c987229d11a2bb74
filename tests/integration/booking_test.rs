//! Integration tests for browsing, booking, cancelling, and history.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_book_twice_cancel_and_history() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    let id = app.create_movie(&admin, "Dune").await;
    let alice_id = app
        .stores
        .users
        .find_by_username("alice")
        .await
        .unwrap()
        .unwrap()
        .id
        .get();

    let first = app
        .request("POST", &format!("/movies/{id}/book"), None, Some(&user))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.message(), "Ticket booked successfully");
    assert_eq!(first.body["booking"]["movie_id"], json!(id));
    assert_eq!(first.body["booking"]["user_id"], json!(alice_id));

    let second = app
        .request("POST", &format!("/movies/{id}/book"), None, Some(&user))
        .await;
    assert_eq!(second.status, StatusCode::BAD_REQUEST);
    assert_eq!(second.message(), "You have already booked this movie");

    let cancel = app
        .request("DELETE", &format!("/movies/{id}/cancel"), None, Some(&user))
        .await;
    assert_eq!(cancel.status, StatusCode::NO_CONTENT);

    let history = app.request("GET", "/movies/history", None, Some(&user)).await;
    assert_eq!(history.status, StatusCode::OK);
    assert_eq!(history.body, json!([]));

    let rebook = app
        .request("POST", &format!("/movies/{id}/book"), None, Some(&user))
        .await;
    assert_eq!(rebook.status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_book_ignores_request_body() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    let response = app
        .request(
            "POST",
            &format!("/movies/{id}/book"),
            Some(json!({ "movie_id": 9999, "user_id": 1 })),
            Some(&user),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["booking"]["movie_id"], json!(id));
}

#[tokio::test]
async fn test_book_missing_movie() {
    let app = helpers::TestApp::new();
    let user = app.token_for("alice", false).await;

    let response = app
        .request("POST", "/movies/4242/book", None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Movie not found");
    assert!(app.stores.bookings.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cancel_without_booking() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    let response = app
        .request("DELETE", &format!("/movies/{id}/cancel"), None, Some(&user))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.message(), "Booking not found");
}

#[tokio::test]
async fn test_cancel_only_touches_own_booking() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let alice = app.token_for("alice", false).await;
    let bob = app.token_for("bob", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    app.request("POST", &format!("/movies/{id}/book"), None, Some(&bob))
        .await;

    let response = app
        .request("DELETE", &format!("/movies/{id}/cancel"), None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let history = app.request("GET", "/movies/history", None, Some(&bob)).await;
    assert_eq!(history.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_movie_listing_is_projection() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    app.create_movie(&admin, "Dune").await;

    let response = app.request("GET", "/movies", None, Some(&user)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{ "title": "Dune", "showtime": "2030-03-01T19:30:00Z" }])
    );
}

#[tokio::test]
async fn test_history_is_scoped_to_caller() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let alice = app.token_for("alice", false).await;
    let bob = app.token_for("bob", false).await;
    let dune = app.create_movie(&admin, "Dune").await;
    let heat = app.create_movie(&admin, "Heat").await;

    for id in [dune, heat] {
        app.request("POST", &format!("/movies/{id}/book"), None, Some(&alice))
            .await;
    }
    app.request("POST", &format!("/movies/{heat}/book"), None, Some(&bob))
        .await;

    let history = app.request("GET", "/movies/history", None, Some(&alice)).await;
    let movie_ids: Vec<i64> = history
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["movie_id"].as_i64().unwrap())
        .collect();
    assert_eq!(movie_ids, vec![dune, heat]);
}

#[tokio::test]
async fn test_deleting_movie_removes_its_bookings() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let user = app.token_for("alice", false).await;
    let id = app.create_movie(&admin, "Dune").await;

    app.request("POST", &format!("/movies/{id}/book"), None, Some(&user))
        .await;
    app.request("DELETE", &format!("/admin/movies/{id}"), None, Some(&admin))
        .await;

    let history = app.request("GET", "/movies/history", None, Some(&user)).await;
    assert_eq!(history.body, json!([]));
}

#[tokio::test]
async fn test_admin_can_book_too() {
    let app = helpers::TestApp::new();
    let admin = app.token_for("root", true).await;
    let id = app.create_movie(&admin, "Dune").await;

    let response = app
        .request("POST", &format!("/movies/{id}/book"), None, Some(&admin))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
}
