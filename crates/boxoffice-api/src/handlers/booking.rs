//! Booking handlers for any signed-in user.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use boxoffice_core::types::MovieId;
use boxoffice_entity::{Booking, MovieListing};

use crate::dto::response::BookingResponse;
use crate::error::ApiError;
use crate::extractors::{ApiPath, AuthUser};
use crate::state::AppState;

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<MovieListing>>, ApiError> {
    let movies = state.booking_service.list_available_movies(&user).await?;
    Ok(Json(movies))
}

/// POST /movies/{movie_id}/book
///
/// The movie comes from the path; any request body is ignored.
pub async fn book(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(movie_id): ApiPath<MovieId>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let booking = state.booking_service.book(&user, movie_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            message: "Ticket booked successfully".to_string(),
            booking,
        }),
    ))
}

/// DELETE /movies/{movie_id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    user: AuthUser,
    ApiPath(movie_id): ApiPath<MovieId>,
) -> Result<StatusCode, ApiError> {
    state.booking_service.cancel(&user, movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /movies/history
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = state.booking_service.history(&user).await?;
    Ok(Json(bookings))
}
