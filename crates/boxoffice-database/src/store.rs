//! Store traits consumed by the service layer.
//!
//! Implementations must enforce the schema rules themselves:
//! usernames are unique, and at most one booking exists per
//! `(user_id, movie_id)` pair. A violated uniqueness rule is reported as
//! [`ErrorKind::Conflict`](boxoffice_core::error::ErrorKind::Conflict); a
//! booking that references a missing user or movie is reported as
//! [`ErrorKind::NotFound`](boxoffice_core::error::ErrorKind::NotFound).

use async_trait::async_trait;

use boxoffice_core::result::AppResult;
use boxoffice_core::types::{BookingId, MovieId, UserId};
use boxoffice_entity::{Booking, Movie, NewBooking, NewMovie, NewUser, User};

/// User persistence.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a user by exact (case-sensitive) username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// List every user in id order.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert a user. Fails with `Conflict` if the username is taken.
    async fn insert(&self, user: &NewUser) -> AppResult<User>;
}

/// Movie persistence.
#[async_trait]
pub trait MovieStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a movie by primary key.
    async fn find_by_id(&self, id: MovieId) -> AppResult<Option<Movie>>;

    /// List every movie in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Movie>>;

    /// Insert a movie and return it with its assigned id.
    async fn insert(&self, movie: &NewMovie) -> AppResult<Movie>;

    /// Overwrite title, description and showtime of an existing movie.
    ///
    /// Returns `None` if the movie no longer exists.
    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>>;

    /// Delete a movie together with every booking that references it.
    ///
    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: MovieId) -> AppResult<bool>;
}

/// Booking persistence.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find the live booking for a `(user, movie)` pair.
    async fn find_by_user_and_movie(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> AppResult<Option<Booking>>;

    /// List a user's bookings in id order.
    async fn find_all_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>>;

    /// List every booking in id order.
    async fn find_all(&self) -> AppResult<Vec<Booking>>;

    /// Insert a booking.
    ///
    /// Fails with `Conflict` if the pair is already booked and with
    /// `NotFound` if the user or movie does not exist. The uniqueness
    /// check and the insert are a single atomic step.
    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking>;

    /// Delete a booking. Returns `false` if it was already gone.
    async fn delete(&self, id: BookingId) -> AppResult<bool>;
}
