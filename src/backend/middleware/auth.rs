/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies bearer tokens from the
 * Authorization header and hands the verified identity to handlers.
 *
 * # Gate
 *
 * 1. `Authorization` header present and non-empty, else "Authorization header required"
 * 2. Value is `Bearer <token>` with a non-empty token, else "Invalid authorization header format"
 * 3. Token passes [`TokenVerifier`], else "Invalid or expired token" / "Token has expired"
 * 4. [`AuthenticatedUser`] is attached to the request and the handler runs
 *
 * A rejected request never reaches the handler.
 *
 * # Handlers
 *
 * Handlers take [`AuthUser`] as an argument. It moves the identity out of the
 * request, so it can be read once per request.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenVerifier;
use crate::backend::error::{AuthError, BackendError};

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated user data extracted from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

/// Authentication middleware
///
/// Mounted with `axum::middleware::from_fn_with_state(verifier, require_auth)`.
/// Returns 401 if the header is missing or malformed or the token fails verification.
pub async fn require_auth(
    State(verifier): State<TokenVerifier>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            AuthError::MissingHeader
        })?;

    let token = header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            AuthError::InvalidHeaderFormat
        })?;

    let verified = verifier.verify(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        e
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: verified.user_id,
        email: verified.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only valid on routes behind [`require_auth`]. Anywhere else the identity is
/// missing, which is a routing bug and answers 500.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .remove::<AuthenticatedUser>()
            .ok_or_else(|| {
                tracing::error!("AuthenticatedUser not found in request extensions");
                BackendError::internal("authenticated user missing from request")
            })?;

        Ok(AuthUser(user))
    }
}
