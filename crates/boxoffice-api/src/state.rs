//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use boxoffice_auth::{AccessGate, JwtDecoder, JwtEncoder, PasswordHasher};
use boxoffice_core::config::AppConfig;
use boxoffice_core::error::AppError;
use boxoffice_database::Stores;
use boxoffice_service::{AuthService, BookingService, CatalogService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    pub stores: Stores,
    /// Process start, for `/health` uptime.
    pub started_at: Instant,

    // ── Auth ─────────────────────────────────────────────────
    pub gate: AccessGate,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub catalog_service: Arc<CatalogService>,
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wire the auth system and services over an existing store bundle.
    pub fn new(config: AppConfig, stores: Stores) -> Result<Self, AppError> {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth)?);
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth)?);
        let password_hasher = Arc::new(PasswordHasher::new(&config.auth.argon2)?);

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            password_hasher,
            jwt_encoder,
            config.auth.allow_admin_registration,
        ));
        let catalog_service = Arc::new(CatalogService::new(
            Arc::clone(&stores.movies),
            Arc::clone(&stores.bookings),
        ));
        let booking_service = Arc::new(BookingService::new(
            Arc::clone(&stores.movies),
            Arc::clone(&stores.bookings),
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            started_at: Instant::now(),
            gate: AccessGate::new(jwt_decoder),
            auth_service,
            catalog_service,
            booking_service,
        })
    }
}
