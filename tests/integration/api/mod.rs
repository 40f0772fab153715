//! API integration tests
//!
//! Integration tests for all API endpoints

mod gate_test;
mod products_test;
mod users_test;
