/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes (health, register, login)
 * 2. Protected routes (user lookups, products), behind the auth gate
 * 3. Fallback handler (404 problem document)
 *
 * The gate is attached with `route_layer` to the protected group only, after
 * its routes are registered, so every protected route is covered and no
 * public route is.
 */

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::require_auth;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::product_routes::configure_protected_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, hasher, and token issuer/verifier
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// ## Public
///
/// - `GET /` - Health check
/// - `POST /auth/register` - User registration
/// - `POST /auth/login` - User login
///
/// ## Protected (`Authorization: Bearer <token>`)
///
/// - `GET /users/id/{id}`, `GET /users/email/{email}`
/// - `POST|GET /products`, `GET|PUT|PATCH|DELETE /products/{id}`
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = configure_protected_routes(Router::new()).route_layer(
        middleware::from_fn_with_state(app_state.verifier.clone(), require_auth),
    );

    configure_api_routes(Router::new())
        .merge(protected)
        .fallback(|| async { BackendError::not_found("Resource not found") })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
