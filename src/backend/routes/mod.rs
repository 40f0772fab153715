//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`router`** - `create_router`, combines every group and applies layers
//! - **`api_routes`** - public routes (health, register, login)
//! - **`product_routes`** - routes behind the auth gate (users, products)

/// Router assembly
pub mod router;

/// Public routes
pub mod api_routes;

/// Protected routes
pub mod product_routes;

pub use router::create_router;
