/**
 * Product Store
 *
 * Every operation takes the owner's user ID and only ever touches that
 * user's rows. A product owned by someone else behaves exactly like one
 * that does not exist.
 *
 * The `(user_id, name, price)` triple is unique; writes that would repeat it
 * fail with `StoreError::UniqueViolation`.
 */

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::db::with_deadline;
use crate::backend::error::StoreError;
use crate::backend::products::models::{PatchProductRequest, Product};

/// Product store operations, all scoped to `user_id`
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, user_id: Uuid, name: &str, price: f64) -> Result<Product, StoreError>;

    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// All of the user's products, oldest first
    async fn list(&self, user_id: Uuid) -> Result<Vec<Product>, StoreError>;

    /// Replace name and price; `None` if the product is not the user's
    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: &str,
        price: f64,
    ) -> Result<Option<Product>, StoreError>;

    /// Change only the fields present in `changes`
    async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: &PatchProductRequest,
    ) -> Result<Option<Product>, StoreError>;

    /// `true` if a row was removed
    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, StoreError>;
}

const PRODUCT_COLUMNS: &str = "id, name, price, user_id, created_at, updated_at";

/// PostgreSQL-backed product store
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
    timeout: Duration,
}

impl PgProductRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, user_id: Uuid, name: &str, price: f64) -> Result<Product, StoreError> {
        let sql = format!(
            "INSERT INTO products (id, name, price, user_id) VALUES ($1, $2, $3, $4) RETURNING {}",
            PRODUCT_COLUMNS
        );
        with_deadline(
            "create_product",
            self.timeout,
            sqlx::query_as::<_, Product>(&sql)
                .bind(Uuid::new_v4())
                .bind(name)
                .bind(price)
                .bind(user_id)
                .fetch_one(&self.pool),
        )
        .await
    }

    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "SELECT {} FROM products WHERE id = $1 AND user_id = $2",
            PRODUCT_COLUMNS
        );
        with_deadline(
            "find_product",
            self.timeout,
            sqlx::query_as::<_, Product>(&sql)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Product>, StoreError> {
        let sql = format!(
            "SELECT {} FROM products WHERE user_id = $1 ORDER BY created_at, id",
            PRODUCT_COLUMNS
        );
        with_deadline(
            "list_products",
            self.timeout,
            sqlx::query_as::<_, Product>(&sql)
                .bind(user_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: &str,
        price: f64,
    ) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products SET name = $1, price = $2, updated_at = NOW() \
             WHERE id = $3 AND user_id = $4 RETURNING {}",
            PRODUCT_COLUMNS
        );
        with_deadline(
            "update_product",
            self.timeout,
            sqlx::query_as::<_, Product>(&sql)
                .bind(name)
                .bind(price)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: &PatchProductRequest,
    ) -> Result<Option<Product>, StoreError> {
        let sql = format!(
            "UPDATE products SET name = COALESCE($1, name), price = COALESCE($2, price), \
             updated_at = NOW() WHERE id = $3 AND user_id = $4 RETURNING {}",
            PRODUCT_COLUMNS
        );
        with_deadline(
            "patch_product",
            self.timeout,
            sqlx::query_as::<_, Product>(&sql)
                .bind(changes.name.as_deref())
                .bind(changes.price)
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool),
        )
        .await
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = with_deadline(
            "delete_product",
            self.timeout,
            sqlx::query("DELETE FROM products WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(user_id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// In-process product store
#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Would a product with `name`/`price` collide with one of the owner's others?
fn collides(
    products: &HashMap<Uuid, Product>,
    user_id: Uuid,
    name: &str,
    price: f64,
    except: Option<Uuid>,
) -> bool {
    products.values().any(|p| {
        p.user_id == user_id && p.name == name && p.price == price && Some(p.id) != except
    })
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, user_id: Uuid, name: &str, price: f64) -> Result<Product, StoreError> {
        let mut products = self.products.write().await;
        if collides(&products, user_id, name, price, None) {
            return Err(StoreError::UniqueViolation {
                operation: "create_product",
            });
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            price,
            user_id,
            created_at: now,
            updated_at: now,
        };
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find(&self, user_id: Uuid, id: Uuid) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.get(&id).filter(|p| p.user_id == user_id).cloned())
    }

    async fn list(&self, user_id: Uuid) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().await;
        let mut owned: Vec<Product> = products
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        name: &str,
        price: f64,
    ) -> Result<Option<Product>, StoreError> {
        self.patch(
            user_id,
            id,
            &PatchProductRequest {
                name: Some(name.to_string()),
                price: Some(price),
            },
        )
        .await
    }

    async fn patch(
        &self,
        user_id: Uuid,
        id: Uuid,
        changes: &PatchProductRequest,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        let Some(current) = products.get(&id).filter(|p| p.user_id == user_id) else {
            return Ok(None);
        };

        let name = changes.name.clone().unwrap_or_else(|| current.name.clone());
        let price = changes.price.unwrap_or(current.price);
        if collides(&products, user_id, &name, price, Some(id)) {
            return Err(StoreError::UniqueViolation {
                operation: "patch_product",
            });
        }

        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };
        product.name = name;
        product.price = price;
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        if products.get(&id).is_some_and(|p| p.user_id == user_id) {
            products.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
