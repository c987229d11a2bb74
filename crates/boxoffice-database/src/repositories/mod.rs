//! PostgreSQL implementations of the store traits.

pub mod booking;
pub mod movie;
pub mod user;

pub use booking::BookingRepository;
pub use movie::MovieRepository;
pub use user::UserRepository;

use boxoffice_core::error::{AppError, ErrorKind};

/// Translate a sqlx error, turning constraint violations into domain kinds.
///
/// Unique violations become `Conflict`, foreign-key violations become
/// `NotFound`; everything else is a `Database` error carrying `context`.
pub(crate) fn map_sqlx_error(err: sqlx::Error, context: &str) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return AppError::with_source(
                ErrorKind::Conflict,
                format!("{context}: violates {constraint}"),
                err,
            );
        }
        if db_err.is_foreign_key_violation() {
            let constraint = db_err.constraint().unwrap_or("foreign key").to_string();
            return AppError::with_source(
                ErrorKind::NotFound,
                format!("{context}: violates {constraint}"),
                err,
            );
        }
    }
    AppError::with_source(ErrorKind::Database, context.to_string(), err)
}
