//! Catalog manager: admin-gated CRUD over movies plus the global booking view.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use boxoffice_auth::{AccessGate, Identity};
use boxoffice_core::error::AppError;
use boxoffice_core::types::MovieId;
use boxoffice_core::types::timestamp::deserialize_optional;
use boxoffice_database::{BookingStore, MovieStore};
use boxoffice_entity::{Booking, Movie, NewMovie};

use crate::error::DomainError;

/// Movie fields as supplied by a caller, before validation.
///
/// Every field is required; missing, null, or blank values are rejected
/// by the catalog with [`DomainError::InvalidMovieData`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional")]
    pub showtime: Option<DateTime<Utc>>,
}

impl MovieInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        showtime: DateTime<Utc>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            showtime: Some(showtime),
        }
    }

    fn validate(self) -> Result<NewMovie, DomainError> {
        let title = required_text(self.title, "title")?;
        let description = required_text(self.description, "description")?;
        let showtime = self
            .showtime
            .ok_or_else(|| DomainError::InvalidMovieData("showtime is required".into()))?;

        Ok(NewMovie {
            title,
            description,
            showtime,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::InvalidMovieData(format!("{field} is required"))),
    }
}

/// Admin movie management.
#[derive(Debug, Clone)]
pub struct CatalogService {
    movies: Arc<dyn MovieStore>,
    bookings: Arc<dyn BookingStore>,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(movies: Arc<dyn MovieStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { movies, bookings }
    }

    /// Every movie with full details, in insertion order.
    pub async fn list_movies(&self, identity: &Identity) -> Result<Vec<Movie>, AppError> {
        AccessGate::require_admin(identity)?;
        self.movies.find_all().await
    }

    /// Validate `input` and add it to the catalog.
    pub async fn create_movie(
        &self,
        identity: &Identity,
        input: MovieInput,
    ) -> Result<Movie, AppError> {
        AccessGate::require_admin(identity)?;
        let new_movie = input.validate()?;

        let movie = self.movies.insert(&new_movie).await?;
        info!(movie_id = %movie.id, title = %movie.title, admin = %identity.user_id(), "Movie created");
        Ok(movie)
    }

    /// Replace title, description and showtime of an existing movie.
    pub async fn update_movie(
        &self,
        identity: &Identity,
        id: MovieId,
        input: MovieInput,
    ) -> Result<Movie, AppError> {
        AccessGate::require_admin(identity)?;
        let fields = input.validate()?;

        let mut movie = self
            .movies
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MovieNotFound)?;

        movie.title = fields.title;
        movie.description = fields.description;
        movie.showtime = fields.showtime;

        let updated = self
            .movies
            .update(&movie)
            .await?
            .ok_or(DomainError::MovieNotFound)?;

        info!(movie_id = %id, admin = %identity.user_id(), "Movie updated");
        Ok(updated)
    }

    /// Remove a movie and its bookings. Returns the movie as it was.
    pub async fn delete_movie(&self, identity: &Identity, id: MovieId) -> Result<Movie, AppError> {
        AccessGate::require_admin(identity)?;

        let movie = self
            .movies
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MovieNotFound)?;

        if !self.movies.delete(id).await? {
            return Err(DomainError::MovieNotFound.into());
        }

        info!(movie_id = %id, admin = %identity.user_id(), "Movie deleted");
        Ok(movie)
    }

    /// Every booking in the system.
    pub async fn list_bookings(&self, identity: &Identity) -> Result<Vec<Booking>, AppError> {
        AccessGate::require_admin(identity)?;
        self.bookings.find_all().await
    }
}
