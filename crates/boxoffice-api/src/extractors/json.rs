//! Body extractors whose rejections use the API error format.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

use boxoffice_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but malformed bodies become `422` validation errors.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text()).into()),
        }
    }
}

/// [`ApiJson`] followed by `validator` rules on the body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<T>::from_request(req, state).await?;
        value
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self(value))
    }
}

/// [`ValidatedJson`] that also takes `application/x-www-form-urlencoded`
/// bodies, as password-grant login clients send them.
#[derive(Debug, Clone)]
pub struct ValidatedJsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJsonOrForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form(&req) {
            match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => value,
                Err(rejection) => return Err(AppError::validation(rejection.body_text()).into()),
            }
        } else {
            ApiJson::<T>::from_request(req, state).await?.0
        };

        value
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self(value))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;
    use crate::dto::request::LoginRequest;

    fn login_request(content_type: &str, body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/auth/login")
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_form_body_accepted() {
        let req = login_request(
            "application/x-www-form-urlencoded",
            "grant_type=password&username=alice&password=pw",
        );
        let ValidatedJsonOrForm(login) =
            ValidatedJsonOrForm::<LoginRequest>::from_request(req, &()).await.unwrap();
        assert_eq!(login.username, "alice");
        assert_eq!(login.password, "pw");
    }

    #[tokio::test]
    async fn test_json_body_accepted() {
        let req = login_request("application/json", r#"{"username":"bob","password":"pw"}"#);
        let ValidatedJsonOrForm(login) =
            ValidatedJsonOrForm::<LoginRequest>::from_request(req, &()).await.unwrap();
        assert_eq!(login.username, "bob");
    }

    #[tokio::test]
    async fn test_empty_form_field_rejected() {
        let req = login_request("application/x-www-form-urlencoded", "username=&password=pw");
        let err = ValidatedJsonOrForm::<LoginRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_form_missing_field_rejected() {
        let req = login_request("application/x-www-form-urlencoded", "username=alice");
        let err = ValidatedJsonOrForm::<LoginRequest>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
