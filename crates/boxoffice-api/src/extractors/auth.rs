//! Bearer-token extractors.
//!
//! [`AuthUser`] admits any caller with a valid token; [`AdminUser`]
//! additionally requires the admin capability. Both run the access gate
//! before any request body is read.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use boxoffice_auth::{AccessGate, Identity};

use crate::error::ApiError;
use crate::state::AppState;

/// Authenticate the `Authorization: Bearer` credential, if any.
async fn identify(parts: &mut Parts, state: &AppState) -> Result<Identity, ApiError> {
    let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok();
    let token = bearer.as_ref().map(|TypedHeader(auth)| auth.token());

    Ok(state.gate.authenticate_bearer(token)?)
}

/// Any authenticated caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl std::ops::Deref for AuthUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        identify(parts, state).await.map(Self)
    }
}

/// An authenticated caller holding the admin capability.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl std::ops::Deref for AdminUser {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identify(parts, state).await?;
        AccessGate::require_admin(&identity)?;
        Ok(Self(identity))
    }
}
