//! Authentication Module
//!
//! This module handles user registration, login, and bearer token management.
//! It provides HTTP handlers for authentication endpoints and the primitives
//! the auth gate builds on.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt hash/verify wrapper
//! - **`sessions`** - JWT issuance and verification
//! - **`users`** - User model and credential stores
//! - **`credentials`** - Login and registration flows
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - Token issuer and verifier
//! ├── users.rs        - User model and repositories
//! ├── credentials.rs  - authenticate / register
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → digest stored → user returned (201)
//! 2. **Login**: email + password → digest verified → token returned
//! 3. **Protected call**: `Authorization: Bearer <token>` → gate verifies → handler runs
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs signed with one shared secret, valid for 24 hours
//! - Unknown email and wrong password are indistinguishable to the client

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// User data model and stores
pub mod users;

/// Login and registration flows
pub mod credentials;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use handlers::{get_user_by_email, get_user_by_id, login, register};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenIssuer, TokenVerifier, VerifiedToken};
pub use users::{MemoryUserRepository, PgUserRepository, User, UserRepository};
