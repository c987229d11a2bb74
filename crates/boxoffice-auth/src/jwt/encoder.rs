//! Token issuing.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use boxoffice_core::config::AuthConfig;
use boxoffice_core::error::AppError;
use boxoffice_core::types::UserId;

use super::claims::Claims;
use super::signing_algorithm;

/// Signs access tokens with the process-wide key and algorithm.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    header: Header,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("alg", &self.header.alg)
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

/// A freshly signed token and its absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates an encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let alg = signing_algorithm(&config.jwt_algorithm)?;
        let minutes = i64::try_from(config.access_token_ttl_minutes)
            .map_err(|_| AppError::configuration("auth.access_token_ttl_minutes is too large"))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(alg),
            access_ttl: Duration::minutes(minutes),
        })
    }

    /// The configured access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Sign `{username, user_id, is_admin}` with an expiry of now + `ttl`.
    pub fn issue(
        &self,
        username: &str,
        user_id: UserId,
        is_admin: bool,
        ttl: Duration,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: username.to_string(),
            id: user_id,
            is_admin,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Issue with the configured access token lifetime.
    pub fn issue_access(
        &self,
        username: &str,
        user_id: UserId,
        is_admin: bool,
    ) -> Result<IssuedToken, AppError> {
        self.issue(username, user_id, is_admin, self.access_ttl)
    }
}
