//! Domain error taxonomy.

use thiserror::Error;

use boxoffice_core::error::{AppError, ErrorKind};

/// Rule violations raised by the services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Username already exists")]
    UsernameTaken,
    /// Unknown username and wrong password are deliberately the same error.
    #[error("Invalid Username Or Password")]
    InvalidCredentials,
    #[error("Movie not found")]
    MovieNotFound,
    #[error("Booking not found")]
    BookingNotFound,
    #[error("You have already booked this movie")]
    BookingAlreadyExists,
    #[error("Invalid Movie Data: {0}")]
    InvalidMovieData(String),
    #[error("Admin accounts cannot be self-registered")]
    AdminRegistrationDisabled,
}

impl DomainError {
    /// The error category this rule maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UsernameTaken | Self::BookingAlreadyExists => ErrorKind::Conflict,
            Self::InvalidCredentials | Self::MovieNotFound | Self::BookingNotFound => {
                ErrorKind::NotFound
            }
            Self::InvalidMovieData(_) => ErrorKind::Validation,
            Self::AdminRegistrationDisabled => ErrorKind::Forbidden,
        }
    }

    /// Recover the domain error carried by an [`AppError`], if any.
    pub fn of(err: &AppError) -> Option<&DomainError> {
        err.source.as_deref()?.downcast_ref::<DomainError>()
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::with_source(err.kind(), err.to_string(), err)
    }
}
