//! Token validation errors.

use thiserror::Error;

use boxoffice_core::error::{AppError, ErrorKind};

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Bad signature, malformed structure, wrong algorithm, or missing claims.
    #[error("Invalid token")]
    InvalidToken,
    /// Signature verified but the expiry has passed.
    #[error("Token has expired")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::with_source(ErrorKind::Unauthorized, err.to_string(), err)
    }
}
