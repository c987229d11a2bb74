//! Auth flow: registration (uniqueness + hashing) and login (verify + mint).

use std::sync::Arc;

use tracing::{debug, info, warn};

use boxoffice_auth::{CredentialHasher, IssuedToken, JwtEncoder};
use boxoffice_core::error::{AppError, ErrorKind};
use boxoffice_database::UserStore;
use boxoffice_entity::{NewUser, User};

use crate::error::DomainError;

/// Produces accounts and tokens. Sits beside the access gate rather than
/// behind it.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn CredentialHasher>,
    encoder: Arc<JwtEncoder>,
    allow_admin_registration: bool,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn CredentialHasher>,
        encoder: Arc<JwtEncoder>,
        allow_admin_registration: bool,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            allow_admin_registration,
        }
    }

    /// Self-registration.
    ///
    /// `is_admin = true` is honoured only while admin self-registration is
    /// enabled in configuration.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, AppError> {
        if is_admin && !self.allow_admin_registration {
            warn!(username = %username, "Rejected admin self-registration");
            return Err(DomainError::AdminRegistrationDisabled.into());
        }
        self.create_account(username, password, is_admin).await
    }

    /// Provision an admin outside the public registration path.
    pub async fn create_admin(&self, username: &str, password: &str) -> Result<User, AppError> {
        self.create_account(username, password, true).await
    }

    async fn create_account(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, AppError> {
        if username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if self.users.find_by_username(username).await?.is_some() {
            debug!(username = %username, "Username already taken");
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash = self.hasher.hash(password)?;

        // A concurrent registration can still win between the lookup and the insert.
        let user = self
            .users
            .insert(&NewUser {
                username: username.to_string(),
                password_hash,
                is_admin,
            })
            .await
            .map_err(|e| match e.kind {
                ErrorKind::Conflict => DomainError::UsernameTaken.into(),
                _ => e,
            })?;

        info!(user_id = %user.id, username = %user.username, is_admin = user.is_admin, "User registered");
        Ok(user)
    }

    /// Verify credentials and mint an access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            debug!(username = %username, "Login for unknown user");
            return Err(DomainError::InvalidCredentials.into());
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Login with wrong password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let token = self
            .encoder
            .issue_access(&user.username, user.id, user.is_admin)?;

        info!(user_id = %user.id, "User logged in");
        Ok(token)
    }
}
