/**
 * Product Handlers
 *
 * HTTP handlers for `/products`. All of them sit behind the auth gate and
 * operate on the caller's own products only.
 *
 * # Endpoints
 *
 * - `POST   /products`      - create (201)
 * - `GET    /products`      - list the caller's products (200, `[]` when none)
 * - `GET    /products/{id}` - fetch one (200)
 * - `PUT    /products/{id}` - replace name and price (200)
 * - `PATCH  /products/{id}` - change name and/or price (200)
 * - `DELETE /products/{id}` - remove (204)
 *
 * A product that exists but belongs to someone else answers 404, the same as
 * one that does not exist.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use uuid::Uuid;

use crate::backend::error::{BackendError, StoreError};
use crate::backend::extract::{UuidPath, ValidatedJson};
use crate::backend::middleware::AuthUser;
use crate::backend::products::db::ProductRepository;
use crate::backend::products::models::{PatchProductRequest, Product, ProductRequest};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const PRODUCT_EXISTS: &str = "Product already exists";

type Products = State<Arc<dyn ProductRepository>>;

/// Translate a duplicate `(name, price)` into 409, pass everything else through
fn conflict_on_duplicate(err: StoreError) -> BackendError {
    match err {
        StoreError::UniqueViolation { .. } => BackendError::conflict(PRODUCT_EXISTS),
        other => other.into(),
    }
}

fn found(product: Option<Product>, user_id: Uuid, id: Uuid) -> Result<Json<Product>, BackendError> {
    product.map(Json).ok_or_else(|| {
        tracing::debug!(%user_id, product_id = %id, "Product not found for user");
        BackendError::not_found(PRODUCT_NOT_FOUND)
    })
}

/// Create product handler
///
/// # Errors
///
/// * `409 Conflict` - The caller already has a product with this name and price
/// * `422 Unprocessable Entity` - Name shorter than 2 characters or price not above 0
pub async fn create_product(
    State(products): Products,
    AuthUser(user): AuthUser,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<(StatusCode, Json<Product>), BackendError> {
    let (name, price) = request
        .into_parts()
        .ok_or_else(|| BackendError::internal("validated product request missing fields"))?;

    let product = products
        .create(user.user_id, &name, price)
        .await
        .map_err(conflict_on_duplicate)?;

    tracing::info!(user_id = %user.user_id, product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// List the caller's products
pub async fn list_products(
    State(products): Products,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Product>>, BackendError> {
    Ok(Json(products.list(user.user_id).await?))
}

pub async fn get_product(
    State(products): Products,
    AuthUser(user): AuthUser,
    UuidPath(id): UuidPath,
) -> Result<Json<Product>, BackendError> {
    found(products.find(user.user_id, id).await?, user.user_id, id)
}

/// Replace a product's name and price
pub async fn update_product(
    State(products): Products,
    AuthUser(user): AuthUser,
    UuidPath(id): UuidPath,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> Result<Json<Product>, BackendError> {
    let (name, price) = request
        .into_parts()
        .ok_or_else(|| BackendError::internal("validated product request missing fields"))?;

    let product = products
        .update(user.user_id, id, &name, price)
        .await
        .map_err(conflict_on_duplicate)?;
    found(product, user.user_id, id)
}

/// Change only the supplied fields
pub async fn patch_product(
    State(products): Products,
    AuthUser(user): AuthUser,
    UuidPath(id): UuidPath,
    ValidatedJson(changes): ValidatedJson<PatchProductRequest>,
) -> Result<Json<Product>, BackendError> {
    let product = products
        .patch(user.user_id, id, &changes)
        .await
        .map_err(conflict_on_duplicate)?;
    found(product, user.user_id, id)
}

pub async fn delete_product(
    State(products): Products,
    AuthUser(user): AuthUser,
    UuidPath(id): UuidPath,
) -> Result<StatusCode, BackendError> {
    if products.delete(user.user_id, id).await? {
        tracing::info!(user_id = %user.user_id, product_id = %id, "Product deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(BackendError::not_found(PRODUCT_NOT_FOUND))
    }
}
