//! # boxoffice-service
//!
//! Business logic for BoxOffice. Each service reads and writes through the
//! store traits from `boxoffice-database` and receives the caller as an
//! [`Identity`](boxoffice_auth::Identity) already produced by the access
//! gate.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod error;

pub use auth::AuthService;
pub use booking::BookingService;
pub use catalog::{CatalogService, MovieInput};
pub use error::DomainError;

#[cfg(test)]
pub(crate) mod testing;
