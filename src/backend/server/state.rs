/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The user and product stores (PostgreSQL or in-memory)
 * - The password hasher
 * - The token issuer and verifier, both keyed by the configured secret
 *
 * Everything here is immutable after startup. The stores handle their own
 * synchronization.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the piece they
 * need, e.g. `State(products): State<Arc<dyn ProductRepository>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::{TokenIssuer, TokenVerifier};
use crate::backend::auth::users::{MemoryUserRepository, PgUserRepository, UserRepository};
use crate::backend::db::DbPool;
use crate::backend::products::{MemoryProductRepository, PgProductRepository, ProductRepository};
use crate::shared::AppConfig;

/// Which store backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    /// Value reported by the health endpoint
    pub fn status(&self) -> &'static str {
        match self {
            Self::Postgres => "connected",
            Self::Memory => "in-memory",
        }
    }
}

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub hasher: PasswordHasher,
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    pub storage: StorageKind,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn with_postgres(pool: DbPool, config: &AppConfig) -> Self {
        Self::build(
            Arc::new(PgUserRepository::new(pool.clone(), config.store_timeout)),
            Arc::new(PgProductRepository::new(pool, config.store_timeout)),
            StorageKind::Postgres,
            config,
        )
    }

    /// State backed by process-local maps
    pub fn in_memory(config: &AppConfig) -> Self {
        Self::build(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryProductRepository::new()),
            StorageKind::Memory,
            config,
        )
    }

    /// State over caller-supplied stores
    pub fn build(
        users: Arc<dyn UserRepository>,
        products: Arc<dyn ProductRepository>,
        storage: StorageKind,
        config: &AppConfig,
    ) -> Self {
        Self {
            users,
            products,
            hasher: PasswordHasher::new(config.bcrypt_cost),
            issuer: TokenIssuer::new(&config.jwt_secret),
            verifier: TokenVerifier::new(&config.jwt_secret),
            storage,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ProductRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.products.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}

impl FromRef<AppState> for TokenIssuer {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.issuer.clone()
    }
}

/// Lets the auth gate be mounted with the whole state as well as with a bare verifier
impl FromRef<AppState> for TokenVerifier {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.verifier.clone()
    }
}

impl FromRef<AppState> for StorageKind {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.storage
    }
}
