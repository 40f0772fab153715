/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across the register, login and user lookup handlers.
 *
 * Request fields are optional at the serde level so a missing field is
 * reported by validation (422 "field is required") instead of as a
 * deserialization failure.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::backend::auth::users::User;

/// Register request
///
/// Contains the email and password for user registration.
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct RegisterRequest {
    /// User's email address
    #[validate(required, email)]
    pub email: Option<String>,
    /// User's password, at least 6 characters and at most 72 bytes (will be hashed before storage)
    #[validate(required, length(min = 6), custom(function = "fits_password_hash"))]
    pub password: Option<String>,
}

/// bcrypt reads at most 72 bytes; anything longer is refused rather than cut
fn fits_password_hash(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        let mut error = ValidationError::new("max_bytes");
        error.add_param("max".into(), &MAX_PASSWORD_BYTES);
        return Err(error);
    }
    Ok(())
}

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct LoginRequest {
    #[validate(required, email)]
    pub email: Option<String>,
    /// User's password (will be verified against stored hash)
    #[validate(required, length(min = 1, code = "required"))]
    pub password: Option<String>,
}

/// Login response, carries only the bearer token
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// JWT token for authentication (24-hour expiration)
    pub token: String,
}

/// User response (without sensitive data)
///
/// Contains user information that is safe to return to clients.
/// Does not include password hash or other sensitive information.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: Uuid,
    /// User's email address
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
