/**
 * User Lookup Handlers
 *
 * GET /users/id/{id} and GET /users/email/{email}. Both sit behind the
 * auth gate and return the public view of a user (no digest).
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::UserRepository;
use crate::backend::error::BackendError;
use crate::backend::extract::{TextPath, UuidPath};
use crate::backend::middleware::AuthUser;

pub const USER_NOT_FOUND: &str = "User not found";
pub const EMAIL_NOT_FOUND: &str = "User with this email is not found";

/// Look a user up by ID
pub async fn get_user_by_id(
    State(users): State<Arc<dyn UserRepository>>,
    AuthUser(caller): AuthUser,
    UuidPath(id): UuidPath,
) -> Result<Json<UserResponse>, BackendError> {
    tracing::debug!(caller = %caller.user_id, target = %id, "User lookup by id");
    users
        .find_by_id(id)
        .await?
        .map(|user| Json(UserResponse::from(user)))
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))
}

/// Look a user up by exact email
pub async fn get_user_by_email(
    State(users): State<Arc<dyn UserRepository>>,
    AuthUser(caller): AuthUser,
    TextPath(email): TextPath,
) -> Result<Json<UserResponse>, BackendError> {
    tracing::debug!(caller = %caller.user_id, "User lookup by email");
    users
        .find_by_email(&email)
        .await?
        .map(|user| Json(UserResponse::from(user)))
        .ok_or_else(|| BackendError::not_found(EMAIL_NOT_FOUND))
}
