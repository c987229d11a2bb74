//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boxoffice_entity::{Booking, Movie};

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub is_admin: bool,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

/// A message plus the affected movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub message: String,
    pub movie: Movie,
}

/// A message plus the created booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub message: String,
    pub booking: Booking,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Readiness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}
