//! The authenticated caller.

use serde::Serialize;

use boxoffice_core::types::UserId;

use crate::jwt::Claims;

/// A caller whose token has been validated.
///
/// Only [`AccessGate::authenticate`](crate::AccessGate::authenticate) can
/// produce one, so holding an `Identity` proves a valid token was presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    username: String,
    user_id: UserId,
    is_admin: bool,
}

impl Identity {
    pub(crate) fn from_claims(claims: Claims) -> Self {
        Self {
            username: claims.sub,
            user_id: claims.id,
            is_admin: claims.is_admin,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
