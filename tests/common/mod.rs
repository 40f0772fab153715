//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Test application and server construction
//! - Authentication test helpers
//! - Database fixtures (PostgreSQL tests only)
//! - Custom assertion macros

pub mod assertions;
#[cfg(feature = "postgres_tests")]
pub mod database;

// Re-export commonly used utilities
pub use app::*;
pub use auth_helpers::*;
