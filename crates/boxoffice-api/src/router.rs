//! Route definitions for the BoxOffice HTTP API.
//!
//! Routes are grouped by audience and mounted at the root. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with every route and the request logging middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(movie_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
}

/// Catalog management and the global booking view
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/movies",
            get(handlers::admin::list_movies).post(handlers::admin::create_movie),
        )
        .route(
            "/admin/movies/{id}",
            put(handlers::admin::update_movie).delete(handlers::admin::delete_movie),
        )
        .route("/admin/bookings", get(handlers::admin::list_bookings))
}

/// Browsing and booking for any signed-in user
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::booking::list_movies))
        .route("/movies/history", get(handlers::booking::history))
        .route("/movies/{movie_id}/book", post(handlers::booking::book))
        .route("/movies/{movie_id}/cancel", delete(handlers::booking::cancel))
}

fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
