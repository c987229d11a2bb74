//! Admin handlers: movie catalog and the global booking list.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use boxoffice_core::types::MovieId;
use boxoffice_entity::{Booking, Movie};

use crate::dto::request::MovieRequest;
use crate::dto::response::MovieResponse;
use crate::error::ApiError;
use crate::extractors::{AdminUser, ApiJson, ApiPath};
use crate::state::AppState;

/// GET /admin/movies
pub async fn list_movies(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = state.catalog_service.list_movies(&admin).await?;
    Ok(Json(movies))
}

/// POST /admin/movies
pub async fn create_movie(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiJson(req): ApiJson<MovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let movie = state.catalog_service.create_movie(&admin, req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MovieResponse {
            message: "Movie added successfully".to_string(),
            movie,
        }),
    ))
}

/// PUT /admin/movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(id): ApiPath<MovieId>,
    ApiJson(req): ApiJson<MovieRequest>,
) -> Result<Json<MovieResponse>, ApiError> {
    let movie = state.catalog_service.update_movie(&admin, id, req).await?;

    Ok(Json(MovieResponse {
        message: "Movie Updated Successfully".to_string(),
        movie,
    }))
}

/// DELETE /admin/movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    admin: AdminUser,
    ApiPath(id): ApiPath<MovieId>,
) -> Result<StatusCode, ApiError> {
    state.catalog_service.delete_movie(&admin, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /admin/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.catalog_service.list_bookings(&admin).await?;
    Ok(Json(bookings))
}
