//! Database Module
//!
//! PostgreSQL connectivity shared by the user and product repositories:
//! pool creation, schema migrations, and the per-call deadline every store
//! operation runs under.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::backend::error::StoreError;

/// Type alias for the database connection pool
pub type DbPool = PgPool;

const MAX_CONNECTIONS: u32 = 10;

/// Create a connection pool and verify it answers
///
/// Acquiring a connection is bounded by `timeout`, the same budget as a
/// single store call.
pub async fn create_pool(database_url: &str, timeout: Duration) -> Result<DbPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(timeout)
        .connect(database_url)
        .await
        .map_err(|e| StoreError::from_sqlx("connect", e))?;

    check_connection(&pool, timeout).await?;
    tracing::info!(max_connections = MAX_CONNECTIONS, "Database connection pool created");
    Ok(pool)
}

/// Run the embedded migrations in `migrations/`
pub async fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}

/// Check database connectivity
pub async fn check_connection(pool: &DbPool, timeout: Duration) -> Result<(), StoreError> {
    with_deadline("check_connection", timeout, async {
        sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
    })
    .await
}

/// Run one store call under `timeout`
///
/// Elapsed deadlines become `StoreError::Timeout`, never a "not found".
pub async fn with_deadline<T, F>(
    operation: &'static str,
    timeout: Duration,
    call: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result.map_err(|e| StoreError::from_sqlx(operation, e)),
        Err(_) => {
            tracing::error!(operation, timeout_ms = timeout.as_millis() as u64, "Store call timed out");
            Err(StoreError::Timeout {
                operation,
                after: timeout,
            })
        }
    }
}
