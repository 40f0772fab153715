/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a bearer token valid for 24 hours
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body
 * - Store timeouts surface as 500, never as bad credentials
 * - Passwords and digests are never logged or returned
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenIssuer;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;

/// Login handler
///
/// # Returns
///
/// `200 OK` with `{"token": "<jwt>"}`
///
/// # Errors
///
/// * `401 Unauthorized` - "Invalid credentials"
/// * `422 Unprocessable Entity` - Missing or malformed fields
/// * `500 Internal Server Error` - Store, hashing or signing failure
pub async fn login(
    State(users): State<Arc<dyn UserRepository>>,
    State(hasher): State<PasswordHasher>,
    State(issuer): State<TokenIssuer>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(BackendError::internal("validated login request missing fields"));
    };

    let user = credentials::authenticate(users.as_ref(), &hasher, &email, &password).await?;
    let token = issuer.issue(user.id, &user.email)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(LoginResponse { token }))
}
