//! Movie entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use boxoffice_core::types::MovieId;

/// A catalog entry with a single showtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: MovieId,
    /// Title; duplicates are allowed.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// When the screening starts.
    pub showtime: DateTime<Utc>,
    /// When the movie was added.
    pub created_at: DateTime<Utc>,
    /// When the movie was last replaced.
    pub updated_at: DateTime<Utc>,
}

/// Data required to add a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Showtime.
    pub showtime: DateTime<Utc>,
}

/// What regular users see when browsing: title and showtime only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieListing {
    /// Title.
    pub title: String,
    /// Showtime.
    pub showtime: DateTime<Utc>,
}

impl From<Movie> for MovieListing {
    fn from(movie: Movie) -> Self {
        Self {
            title: movie.title,
            showtime: movie.showtime,
        }
    }
}
