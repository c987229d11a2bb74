//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use boxoffice_core::types::{BookingId, MovieId, UserId};

/// A live reservation of one movie by one user.
///
/// At most one booking exists per `(user_id, movie_id)` pair. Bookings are
/// never updated in place; cancelling deletes the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: BookingId,
    /// The user holding the booking.
    pub user_id: UserId,
    /// The booked movie.
    pub movie_id: MovieId,
    /// When the booking was made.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    /// The booking user.
    pub user_id: UserId,
    /// The movie to book.
    pub movie_id: MovieId,
}

impl Booking {
    /// Returns the `(user, movie)` pair this booking occupies.
    pub fn pair(&self) -> (UserId, MovieId) {
        (self.user_id, self.movie_id)
    }
}
