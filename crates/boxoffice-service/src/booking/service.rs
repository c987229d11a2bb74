//! Booking engine: at most one live booking per `(user, movie)` pair.
//!
//! The pair lookup before inserting is only an early exit. Uniqueness is
//! guaranteed by the store, whose constraint violation on insert is
//! translated to [`DomainError::BookingAlreadyExists`], so two concurrent
//! `book` calls for one pair can never both succeed.

use std::sync::Arc;

use tracing::{debug, info, warn};

use boxoffice_auth::Identity;
use boxoffice_auth::gate::LOGIN_REQUIRED;
use boxoffice_core::error::{AppError, ErrorKind};
use boxoffice_core::types::MovieId;
use boxoffice_database::{BookingStore, MovieStore};
use boxoffice_entity::{Booking, MovieListing, NewBooking};

use crate::error::DomainError;

/// Booking operations for any authenticated user, scoped to that user.
#[derive(Debug, Clone)]
pub struct BookingService {
    movies: Arc<dyn MovieStore>,
    bookings: Arc<dyn BookingStore>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(movies: Arc<dyn MovieStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { movies, bookings }
    }

    /// Title and showtime of every movie.
    pub async fn list_available_movies(
        &self,
        _identity: &Identity,
    ) -> Result<Vec<MovieListing>, AppError> {
        let movies = self.movies.find_all().await?;
        Ok(movies.into_iter().map(MovieListing::from).collect())
    }

    /// Book `movie_id` for the caller.
    ///
    /// Fails with `MovieNotFound` before touching bookings when the movie
    /// does not exist, and with `BookingAlreadyExists` when the caller
    /// already holds a live booking for it.
    pub async fn book(&self, identity: &Identity, movie_id: MovieId) -> Result<Booking, AppError> {
        let user_id = identity.user_id();

        if self.movies.find_by_id(movie_id).await?.is_none() {
            return Err(DomainError::MovieNotFound.into());
        }

        if self
            .bookings
            .find_by_user_and_movie(user_id, movie_id)
            .await?
            .is_some()
        {
            debug!(user_id = %user_id, movie_id = %movie_id, "Movie already booked");
            return Err(DomainError::BookingAlreadyExists.into());
        }

        let booking = match self.bookings.insert(&NewBooking { user_id, movie_id }).await {
            Ok(booking) => booking,
            Err(e) if e.is(ErrorKind::Conflict) => {
                debug!(user_id = %user_id, movie_id = %movie_id, "Lost booking race");
                return Err(DomainError::BookingAlreadyExists.into());
            }
            Err(e) if e.is(ErrorKind::NotFound) => {
                return Err(self.missing_reference(e, identity, movie_id).await);
            }
            Err(e) => return Err(e),
        };

        info!(booking_id = %booking.id, user_id = %user_id, movie_id = %movie_id, "Ticket booked");
        Ok(booking)
    }

    /// Cancel the caller's booking for `movie_id`.
    pub async fn cancel(&self, identity: &Identity, movie_id: MovieId) -> Result<(), AppError> {
        let user_id = identity.user_id();

        let booking = self
            .bookings
            .find_by_user_and_movie(user_id, movie_id)
            .await?
            .ok_or(DomainError::BookingNotFound)?;

        if !self.bookings.delete(booking.id).await? {
            return Err(DomainError::BookingNotFound.into());
        }

        info!(booking_id = %booking.id, user_id = %user_id, movie_id = %movie_id, "Booking cancelled");
        Ok(())
    }

    /// Classify a foreign-key failure on insert. Either the movie was
    /// deleted after the existence check, or the token names an account
    /// the store no longer has.
    async fn missing_reference(
        &self,
        err: AppError,
        identity: &Identity,
        movie_id: MovieId,
    ) -> AppError {
        match self.movies.find_by_id(movie_id).await {
            Ok(Some(_)) => {
                warn!(
                    user_id = %identity.user_id(),
                    username = %identity.username(),
                    error = %err,
                    "Booking rejected: token names an unknown account"
                );
                AppError::unauthorized(LOGIN_REQUIRED)
            }
            Ok(None) => DomainError::MovieNotFound.into(),
            Err(lookup) => lookup,
        }
    }

    /// The caller's live bookings.
    pub async fn history(&self, identity: &Identity) -> Result<Vec<Booking>, AppError> {
        self.bookings.find_all_by_user(identity.user_id()).await
    }
}
