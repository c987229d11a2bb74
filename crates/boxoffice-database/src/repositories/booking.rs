//! Booking repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use boxoffice_core::result::AppResult;
use boxoffice_core::types::{BookingId, MovieId, UserId};
use boxoffice_entity::{Booking, NewBooking};

use super::map_sqlx_error;
use crate::store::BookingStore;

/// PostgreSQL-backed [`BookingStore`].
///
/// Pair uniqueness rests on the `bookings_user_id_movie_id_key` constraint,
/// so concurrent inserts for one pair cannot both commit.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn find_by_user_and_movie(
        &self,
        user_id: UserId,
        movie_id: MovieId,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to find booking"))
    }

    async fn find_all_by_user(&self, user_id: UserId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = $1 ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to list user bookings"))
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to list bookings"))
    }

    async fn insert(&self, booking: &NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, movie_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(booking.user_id)
        .bind(booking.movie_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create booking"))
    }

    async fn delete(&self, id: BookingId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete booking"))?;

        Ok(result.rows_affected() > 0)
    }
}
