//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//! Middleware functions process requests before they reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Bearer token gate for protected routes, plus the
//!   `AuthUser` extractor handlers use to read the verified identity
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use shopfront::backend::auth::sessions::TokenVerifier;
//! use shopfront::backend::middleware::{require_auth, AuthUser};
//! use shopfront::shared::SigningSecret;
//!
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//!
//! let verifier = TokenVerifier::new(&SigningSecret::new("secret").unwrap());
//! let app: Router = Router::new()
//!     .route("/private", get(handler))
//!     .layer(middleware::from_fn_with_state(verifier, require_auth));
//! ```

pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
