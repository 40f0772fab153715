/**
 * Credential Verification
 *
 * Login and registration flows on top of the user store and password hasher.
 *
 * # Login
 *
 * 1. Look up the user by email
 * 2. Verify the password against the stored digest
 *
 * An unknown email and a wrong password both fail with
 * `AuthError::InvalidCredentials`. Store and hashing failures are never
 * reported as bad credentials.
 *
 * # Registration
 *
 * Hash first, then insert. The store's unique constraint decides races
 * between concurrent registrations of the same email; the loser gets
 * `AuthError::AlreadyExists`.
 */

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{User, UserRepository};
use crate::backend::error::{AuthError, BackendError, StoreError};

/// Check an email/password pair
///
/// # Returns
/// The matching user, `AuthError::InvalidCredentials` on any mismatch, or an
/// internal error if the store or hasher failed
pub async fn authenticate(
    users: &dyn UserRepository,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let Some(user) = users.find_by_email(email).await? else {
        tracing::warn!("Login attempt for unknown email");
        return Err(AuthError::InvalidCredentials.into());
    };

    let valid = hasher
        .verify_async(user.password_hash.clone(), password.to_string())
        .await?;
    if !valid {
        tracing::warn!(user_id = %user.id, "Invalid password");
        return Err(AuthError::InvalidCredentials.into());
    }

    Ok(user)
}

/// Create a user with a freshly hashed password
pub async fn register(
    users: &dyn UserRepository,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let digest = hasher.hash_async(password.to_string()).await?;

    match users.create(email, &digest).await {
        Ok(user) => Ok(user),
        Err(StoreError::UniqueViolation { .. }) => {
            tracing::warn!("Registration rejected, email already registered");
            Err(AuthError::AlreadyExists.into())
        }
        Err(e) => Err(e.into()),
    }
}
