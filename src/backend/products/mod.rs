//! Products Module
//!
//! User-scoped product catalogue.
//!
//! - **`models`** - `Product` record and request bodies with their validation rules
//! - **`db`** - `ProductRepository` with PostgreSQL and in-memory implementations
//! - **`handlers`** - `/products` HTTP handlers

pub mod db;
pub mod handlers;
pub mod models;

pub use db::{MemoryProductRepository, PgProductRepository, ProductRepository};
pub use models::{PatchProductRequest, Product, ProductRequest};
