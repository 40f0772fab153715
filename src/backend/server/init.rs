/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store selection and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations, if a database is configured
 * 2. With no database configured, use the in-memory store
 *
 * A configured database that can not be reached or migrated is a startup
 * failure; it is never swapped for the in-memory store.
 * 3. Build `AppState` from the config's secret and bcrypt cost
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::db::{create_pool, run_migrations, DbPool};
use crate::backend::error::StoreError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::{redact_url, AppConfig};

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if a database is configured but can not be connected to or migrated.
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, StoreError> {
    tracing::info!("Initializing shop backend server");
    let state = build_state(config).await?;
    tracing::info!(storage = state.storage.status(), "Router configured");
    Ok(create_router(state))
}

/// Pick the store and assemble the application state
pub async fn build_state(config: &AppConfig) -> Result<AppState, StoreError> {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("No database configured. Using the in-memory store.");
        return Ok(AppState::in_memory(config));
    };

    let pool = connect(url, config).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        e
    })?;
    Ok(AppState::with_postgres(pool, config))
}

async fn connect(url: &str, config: &AppConfig) -> Result<DbPool, StoreError> {
    tracing::info!(url = %redact_url(url), "Connecting to database...");
    let pool = create_pool(url, config.store_timeout).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
