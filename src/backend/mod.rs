//! Backend Module
//!
//! This module contains all server-side code for the shop API: an Axum HTTP
//! server with user registration, bearer-token login, and per-user product
//! management.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration loading, application state, startup and shutdown
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, JWT tokens, user stores, auth handlers
//! - **`middleware`** - The auth gate and the `AuthUser` extractor
//! - **`products`** - Product model, store, and handlers
//! - **`extract`** - Validating JSON and UUID path extractors
//! - **`db`** - PostgreSQL pool, migrations, per-call deadline
//! - **`error`** - Backend error types and their HTTP responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── products/       - Product catalogue
//! ├── extract/        - Request extractors
//! ├── db/             - Database connectivity
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Public routes go straight to their handler. Protected routes pass the auth
//! gate first; a rejected token never reaches the handler. Handlers return
//! `Result<_, BackendError>` and every error becomes a JSON problem document.
//!
//! # Example
//!
//! ```rust,no_run
//! use shopfront::backend::server::{create_app, serve};
//! use shopfront::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::builder().jwt_secret("change-me").build()?;
//! let app = create_app(&config).await?;
//! serve(app, config.port).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Product catalogue
pub mod products;

/// Request extractors
pub mod extract;

/// Database connectivity
pub mod db;

pub use error::BackendError;
pub use server::{create_app, AppState};
