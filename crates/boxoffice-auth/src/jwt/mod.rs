//! JWT token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use boxoffice_core::config::auth::SUPPORTED_JWT_ALGORITHMS;
use boxoffice_core::error::AppError;

/// Resolve the configured HMAC algorithm name.
pub(crate) fn signing_algorithm(name: &str) -> Result<Algorithm, AppError> {
    if !SUPPORTED_JWT_ALGORITHMS.contains(&name) {
        return Err(AppError::configuration(format!(
            "Unsupported JWT algorithm '{name}'"
        )));
    }
    Algorithm::from_str(name)
        .map_err(|e| AppError::configuration(format!("Invalid JWT algorithm '{name}': {e}")))
}
