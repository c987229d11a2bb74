//! # boxoffice-api
//!
//! HTTP API layer for BoxOffice built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS,
//! tracing, compression, timeout), bearer-token extractors, DTOs, and the
//! mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, build_state, run_server};
pub use error::ApiError;
pub use state::AppState;
pub use telemetry::init_logging;
