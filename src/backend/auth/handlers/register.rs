/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Hash password using bcrypt
 * 3. Create user in the store (the unique email index decides duplicates)
 * 4. Return the created user, without the digest
 *
 * No token is issued here; clients log in afterwards.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::credentials;
use crate::backend::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::ValidatedJson;

/// Register handler
///
/// # Returns
///
/// `201 Created` with `{id, email, created_at}`
///
/// # Errors
///
/// * `409 Conflict` - Email already registered
/// * `422 Unprocessable Entity` - Invalid email or password shorter than 6 characters
/// * `500 Internal Server Error` - Store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn register(
    State(users): State<Arc<dyn UserRepository>>,
    State(hasher): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(BackendError::internal("validated register request missing fields"));
    };

    let user = credentials::register(users.as_ref(), &hasher, &email, &password).await?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
