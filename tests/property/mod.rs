//! Property-based tests
//!
//! Randomized checks of the token and password primitives through the
//! public API.

mod auth_proptest;
