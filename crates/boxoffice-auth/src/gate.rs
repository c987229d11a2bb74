//! Access control gate.
//!
//! Authorization is derived from the presented token on every call; the
//! gate keeps no per-request state. Policy is binary: an operation either
//! needs any authenticated caller or an admin.

use std::sync::Arc;

use tracing::debug;

use boxoffice_core::error::AppError;

use crate::identity::Identity;
use crate::jwt::JwtDecoder;

/// Message for a missing, malformed, or expired token.
pub const LOGIN_REQUIRED: &str = "Login Required";
/// Message for a valid non-admin token on an admin operation.
pub const ADMIN_REQUIRED: &str = "Only Admin Can Perform This Action";

/// Derives identities from bearer tokens and enforces role policy.
#[derive(Debug, Clone)]
pub struct AccessGate {
    decoder: Arc<JwtDecoder>,
}

impl AccessGate {
    /// Creates a gate that validates tokens with `decoder`.
    pub fn new(decoder: Arc<JwtDecoder>) -> Self {
        Self { decoder }
    }

    /// Validate `token` and return the caller's identity.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        match self.decoder.validate(token) {
            Ok(claims) => Ok(Identity::from_claims(claims)),
            Err(e) => {
                debug!(error = %e, "Authentication failed");
                Err(AppError::unauthorized(LOGIN_REQUIRED))
            }
        }
    }

    /// Authenticate an optional bearer credential; absence is `Unauthorized`.
    pub fn authenticate_bearer(&self, token: Option<&str>) -> Result<Identity, AppError> {
        let identity = token.map(|t| self.authenticate(t)).transpose()?;
        Self::require_authenticated(identity)
    }

    /// Pass through only identities holding the admin capability.
    pub fn require_admin(identity: &Identity) -> Result<&Identity, AppError> {
        if identity.is_admin() {
            Ok(identity)
        } else {
            debug!(user_id = %identity.user_id(), "Admin capability required");
            Err(AppError::forbidden(ADMIN_REQUIRED))
        }
    }

    /// Pass through any present identity.
    pub fn require_authenticated(identity: Option<Identity>) -> Result<Identity, AppError> {
        identity.ok_or_else(|| AppError::unauthorized(LOGIN_REQUIRED))
    }
}
