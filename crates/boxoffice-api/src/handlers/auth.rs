//! Auth handlers: register and login.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, RegisterResponse};
use crate::error::ApiError;
use crate::extractors::{ValidatedJson, ValidatedJsonOrForm};
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let user = state
        .auth_service
        .register(&req.username, &req.password, req.is_admin)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            is_admin: user.is_admin,
        }),
    ))
}

/// POST /auth/login
///
/// Accepts JSON or a form-encoded password grant.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJsonOrForm(req): ValidatedJsonOrForm<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state
        .auth_service
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Logged In Successfully".to_string(),
        access_token: token.token,
        token_type: "bearer".to_string(),
        expires_at: token.expires_at,
    }))
}
