/**
 * Protected Routes
 *
 * User lookups and the product catalogue. Everything registered here is
 * wrapped by the auth gate in `router::create_router`.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_user_by_email, get_user_by_id};
use crate::backend::products::handlers::{
    create_product, delete_product, get_product, list_products, patch_product, update_product,
};
use crate::backend::server::state::AppState;

/// Configure routes that require an authenticated user
pub fn configure_protected_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/id/{id}", get(get_user_by_id))
        .route("/users/email/{email}", get(get_user_by_email))
        .route("/products", post(create_product).get(list_products))
        .route(
            "/products/{id}",
            get(get_product)
                .put(update_product)
                .patch(patch_product)
                .delete(delete_product),
        )
}
