//! Request Extractors
//!
//! Wrappers over axum's `Json` and `Path` extractors whose rejections are
//! [`BackendError`]s, so malformed bodies and path parameters produce the
//! same problem documents as every other failure.
//!
//! - [`ValidatedJson`] - deserialize, then run `validator` rules (400 / 422)
//! - [`UuidPath`] - a single UUID path segment (400 "Invalid UUID format")
//! - [`TextPath`] - a single string path segment (400 "Invalid path parameter")

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use validator::Validate;

use crate::backend::error::BackendError;

/// JSON body that has passed its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// `{id}` path parameter parsed as a UUID
#[derive(Debug, Clone, Copy)]
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Invalid UUID path parameter: {}", rejection.body_text());
                BackendError::bad_request("Validation error", "Invalid UUID format")
            })?;
        Ok(Self(id))
    }
}

/// Single string path parameter, e.g. `{email}`
#[derive(Debug, Clone)]
pub struct TextPath(pub String);

impl<S> FromRequestParts<S> for TextPath
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<String>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
