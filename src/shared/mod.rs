//! Shared Module
//!
//! Types that make up the public contract of the API: configuration values
//! and the error document every failing request returns. Nothing in here
//! touches the database or the HTTP stack.

/// Shared error types (problem documents)
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use error::{FieldError, ProblemDetails};
pub use config::{redact_url, AppConfig, AppConfigBuilder, ConfigError, SigningSecret};
