//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! └── users.rs     - User lookup handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register - User registration (public)
//! - **`login`** - POST /auth/login - Token issuance (public)
//! - **`get_user_by_id`** - GET /users/id/{id} (protected)
//! - **`get_user_by_email`** - GET /users/email/{email} (protected)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// User lookup handlers
pub mod users;

pub use types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

pub use login::login;
pub use register::register;
pub use users::{get_user_by_email, get_user_by_id};
