//! Shopfront - Main Library
//!
//! Shopfront is a small e-commerce backend built on Axum: users register and
//! log in with email and password, receive a signed bearer token, and manage
//! a catalogue of products that only they can see.
//!
//! # Overview
//!
//! This library provides:
//! - bcrypt password hashing
//! - HS256 JWT issuance and strict verification
//! - An auth gate that hands verified identities to handlers as a typed extractor
//! - User-scoped product CRUD on PostgreSQL, or in memory when no database is configured
//!
//! # Module Structure
//!
//! - **`shared`** - Types clients can share
//!   - Configuration types (`AppConfig`, `SigningSecret`)
//!   - Problem-document error body (`ProblemDetails`)
//!
//! - **`backend`** - Server-side code
//!   - Axum server, routes, and middleware
//!   - Auth, products, and their stores
//!   - Error types and their HTTP mapping
//!
//! # Usage
//!
//! ```rust,no_run
//! use shopfront::backend::server::{create_app, load_config, serve};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(&config).await?;
//! serve(app, config.port).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums throughout
//! - `backend::error::BackendError` is what handlers return
//! - Every error response is an RFC 7807 problem document (`shared::error`)

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
