//! Integration tests
//!
//! - `api` - HTTP-level tests against the in-memory application
//! - `database` - PostgreSQL repository tests (`postgres_tests` feature)

pub mod api;
#[cfg(feature = "postgres_tests")]
pub mod database;
