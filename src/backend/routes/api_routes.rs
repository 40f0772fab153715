/**
 * Public API Routes
 *
 * Routes reachable without a token:
 * - `GET /` - Health check, reports which store is in use
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login, returns a bearer token
 */

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::backend::auth::{login, register};
use crate::backend::server::state::{AppState, StorageKind};

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
    /// "connected" with PostgreSQL, "in-memory" without
    pub database: String,
}

/// Health check handler
pub async fn health(State(storage): State<StorageKind>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Shop API is running".to_string(),
        status: "success".to_string(),
        database: storage.status().to_string(),
    })
}

/// Configure public routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with the health and auth routes added
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}
