/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Types
 *
 * - `AuthError` - Credential, header and token failures
 * - `StoreError` - Failures talking to the user/product store
 * - `HashingError` - Password hashing primitive failures
 * - `TokenError` - Token signing failures
 * - `BackendError` - What handlers return; wraps all of the above
 *
 * # Error Categories
 *
 * ## Auth Errors
 *
 * Token failures other than expiry collapse to one external message so the
 * response does not reveal which check failed. Unknown email and wrong
 * password share one message so the login endpoint cannot be used to probe
 * for registered addresses.
 *
 * ## Infrastructure Errors
 *
 * Store timeouts, connection failures, hashing and signing failures are
 * logged with full detail and surfaced as a generic 500. They are never
 * reported as an auth failure.
 */

use std::time::Duration;

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{FieldError, ProblemDetails};

/// Message returned for every unexpected server-side failure
pub const INTERNAL_ERROR_DETAIL: &str = "An unexpected error occurred";

/// Authentication and authorization failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration email already taken
    #[error("email already registered")]
    AlreadyExists,

    /// No usable `Authorization` header
    #[error("authorization header missing")]
    MissingHeader,

    /// Header present but not `Bearer <token>`
    #[error("authorization header is not a bearer token")]
    InvalidHeaderFormat,

    /// Token is not three base64url segments with a JSON header
    #[error("token is structurally invalid")]
    InvalidFormat,

    /// Token header declares an algorithm other than HS256
    #[error("token declares an unexpected signing algorithm")]
    UnexpectedAlgorithm,

    /// Signature does not match header and claims
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Claims are missing the identity/expiry or have the wrong shape
    #[error("token claims are malformed")]
    MalformedClaims,

    /// Token is past its `exp`
    #[error("token has expired")]
    Expired,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AlreadyExists => StatusCode::CONFLICT,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Text shown to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::AlreadyExists => "Email already registered",
            Self::MissingHeader => "Authorization header required",
            Self::InvalidHeaderFormat => "Invalid authorization header format",
            Self::InvalidFormat
            | Self::UnexpectedAlgorithm
            | Self::InvalidSignature
            | Self::MalformedClaims => "Invalid or expired token",
            Self::Expired => "Token has expired",
        }
    }
}

/// Failures of the credential/product store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store did not answer within the per-call deadline
    #[error("{operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// A uniqueness constraint rejected the write
    #[error("{operation}: unique constraint violated")]
    UniqueViolation { operation: &'static str },

    /// Any other database failure
    #[error("{operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// Schema migration failure at startup
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
    /// Classify a sqlx error, pulling unique violations out of the generic case
    pub fn from_sqlx(operation: &'static str, source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &source {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation { operation };
            }
        }
        Self::Database { operation, source }
    }
}

/// Password hashing failures
#[derive(Debug, Error)]
pub enum HashingError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Input longer than bcrypt can read in full
    #[error("password longer than {max} bytes")]
    TooLong { max: usize },
}

/// Token signing failure
#[derive(Debug, Error)]
#[error("failed to sign token: {0}")]
pub struct TokenError(#[from] pub jsonwebtoken::errors::Error);

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in a handler.
/// Each variant maps to one HTTP status and one problem document.
///
/// # Usage
///
/// ```rust
/// use shopfront::backend::error::BackendError;
///
/// let err = BackendError::not_found("Product not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Authentication or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request body parsed but failed field validation
    #[error("validation failed")]
    Validation { errors: Vec<FieldError> },

    /// Request could not be parsed (bad JSON, wrong types, bad UUID)
    #[error("bad request: {detail}")]
    BadRequest {
        title: String,
        detail: String,
        errors: Vec<FieldError>,
    },

    /// Resource missing or not owned by the caller
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Resource conflicts with an existing one
    #[error("conflict: {message}")]
    Conflict { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Hashing(#[from] HashingError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// Invariant broken inside the server (e.g. gate not mounted)
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn bad_request(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            title: title.into(),
            detail: detail.into(),
            errors: Vec::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Auth` - 401, or 409 for `AlreadyExists`
    /// - `Validation`, or a password too long to hash - 422 Unprocessable Entity
    /// - `BadRequest` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => err.status_code(),
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Hashing(HashingError::TooLong { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(_) | Self::Hashing(_) | Self::Token(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for failures that are the server's fault rather than the caller's
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Build the problem document sent to the client
    pub fn to_problem(&self) -> ProblemDetails {
        let status = self.status_code().as_u16();
        match self {
            Self::Auth(err) => {
                let title = if *err == AuthError::AlreadyExists {
                    "Conflict"
                } else {
                    "Unauthorized"
                };
                ProblemDetails::new(status, title, err.public_message())
            }
            Self::Validation { errors } => {
                ProblemDetails::new(status, "Validation error", "One or more fields are invalid")
                    .with_type("validation")
                    .with_errors(errors.clone())
            }
            Self::BadRequest {
                title,
                detail,
                errors,
            } => ProblemDetails::new(status, title.clone(), detail.clone())
                .with_type("bad-request")
                .with_errors(errors.clone()),
            Self::NotFound { message } => ProblemDetails::new(status, "Not found", message.clone()),
            Self::Conflict { message } => ProblemDetails::new(status, "Conflict", message.clone()),
            Self::Hashing(HashingError::TooLong { max }) => {
                ProblemDetails::new(status, "Validation error", "One or more fields are invalid")
                    .with_type("validation")
                    .with_errors(vec![FieldError::new(
                        "password",
                        format!("must be at most {} bytes long", max),
                    )])
            }
            Self::Store(_) | Self::Hashing(_) | Self::Token(_) | Self::Internal { .. } => {
                ProblemDetails::new(status, "Internal server error", INTERNAL_ERROR_DETAIL)
                    .with_type("internal")
            }
        }
    }
}
