//! Movie repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use boxoffice_core::result::AppResult;
use boxoffice_core::types::MovieId;
use boxoffice_entity::{Movie, NewMovie};

use super::map_sqlx_error;
use crate::store::MovieStore;

/// PostgreSQL-backed [`MovieStore`].
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: PgPool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for MovieRepository {
    async fn find_by_id(&self, id: MovieId) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find movie"))
    }

    async fn find_all(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to list movies"))
    }

    async fn insert(&self, movie: &NewMovie) -> AppResult<Movie> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (title, description, showtime) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(movie.showtime)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to create movie"))
    }

    async fn update(&self, movie: &Movie) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET title = $2, description = $3, showtime = $4, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(movie.showtime)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(e, "Failed to update movie"))
    }

    async fn delete(&self, id: MovieId) -> AppResult<bool> {
        // bookings.movie_id is ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete movie"))?;

        Ok(result.rows_affected() > 0)
    }
}
