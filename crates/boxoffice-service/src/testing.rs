//! Shared fixtures for service tests.

use std::sync::Arc;

use boxoffice_auth::{AccessGate, Identity, JwtDecoder, JwtEncoder, PasswordHasher};
use boxoffice_core::config::{Argon2Config, AuthConfig};
use boxoffice_core::types::UserId;
use boxoffice_database::Stores;
use boxoffice_entity::NewUser;

use crate::{AuthService, BookingService, CatalogService};

pub(crate) struct Fixture {
    pub stores: Stores,
    pub encoder: Arc<JwtEncoder>,
    pub gate: AccessGate,
    pub auth: AuthService,
    pub catalog: CatalogService,
    pub booking: BookingService,
}

pub(crate) fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "service-test-secret".to_string(),
        argon2: Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        },
        ..AuthConfig::default()
    }
}

pub(crate) fn fixture_with(config: AuthConfig) -> Fixture {
    let stores = Stores::memory();
    let encoder = Arc::new(JwtEncoder::new(&config).unwrap());
    let gate = AccessGate::new(Arc::new(JwtDecoder::new(&config).unwrap()));
    let hasher = Arc::new(PasswordHasher::new(&config.argon2).unwrap());

    Fixture {
        auth: AuthService::new(
            Arc::clone(&stores.users),
            hasher,
            Arc::clone(&encoder),
            config.allow_admin_registration,
        ),
        catalog: CatalogService::new(Arc::clone(&stores.movies), Arc::clone(&stores.bookings)),
        booking: BookingService::new(Arc::clone(&stores.movies), Arc::clone(&stores.bookings)),
        stores,
        encoder,
        gate,
    }
}

pub(crate) fn fixture() -> Fixture {
    fixture_with(auth_config())
}

impl Fixture {
    /// An identity as the gate would produce it for this user.
    pub fn identity(&self, username: &str, user_id: UserId, is_admin: bool) -> Identity {
        let token = self.encoder.issue_access(username, user_id, is_admin).unwrap();
        self.gate.authenticate(&token.token).unwrap()
    }

    /// Insert a user row directly and return its identity.
    pub async fn user(&self, username: &str, is_admin: bool) -> Identity {
        let user = self
            .stores
            .users
            .insert(&NewUser {
                username: username.to_string(),
                password_hash: "unused".to_string(),
                is_admin,
            })
            .await
            .unwrap();
        self.identity(&user.username, user.id, user.is_admin)
    }
}
