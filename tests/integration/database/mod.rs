//! PostgreSQL repository tests
//!
//! Require `DATABASE_URL` to point at a scratch database.

mod repository_test;
