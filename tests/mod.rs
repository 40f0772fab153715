//! Test suite for the shop API
//!
//! This module organizes all integration tests. Unit tests live beside the
//! code they cover.

pub mod common;
pub mod integration;
pub mod property;
