//! PostgreSQL repository tests
//!
//! Run serially against one database; each test truncates first.

use std::time::Duration;

use assert_matches::assert_matches;
use shopfront::backend::auth::{PgUserRepository, UserRepository};
use shopfront::backend::error::StoreError;
use shopfront::backend::products::{PatchProductRequest, PgProductRepository, ProductRepository};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::common::database::TestDatabase;

static SERIAL: Mutex<()> = Mutex::const_new(());

const TIMEOUT: Duration = Duration::from_secs(5);

async fn fresh_database() -> TestDatabase {
    let db = TestDatabase::new().await;
    db.cleanup().await.expect("Failed to clean database");
    db
}

#[tokio::test]
async fn test_user_roundtrip_and_unique_email() {
    let _guard = SERIAL.lock().await;
    let db = fresh_database().await;
    let users = PgUserRepository::new(db.pool().clone(), TIMEOUT);

    let created = users.create("pg@example.com", "$2b$04$digest").await.unwrap();
    assert_eq!(created.email, "pg@example.com");

    let by_email = users.find_by_email("pg@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    let by_id = users.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.password_hash, "$2b$04$digest");

    assert!(users.find_by_email("other@example.com").await.unwrap().is_none());
    assert_matches!(
        users.create("pg@example.com", "$2b$04$other").await,
        Err(StoreError::UniqueViolation { .. })
    );
}

#[tokio::test]
async fn test_product_crud_scoped_by_owner() {
    let _guard = SERIAL.lock().await;
    let db = fresh_database().await;
    let users = PgUserRepository::new(db.pool().clone(), TIMEOUT);
    let products = PgProductRepository::new(db.pool().clone(), TIMEOUT);

    let owner = users.create("owner@example.com", "h").await.unwrap();
    let stranger = users.create("stranger@example.com", "h").await.unwrap();

    let product = products.create(owner.id, "Kettle", 25.0).await.unwrap();
    assert_eq!(product.user_id, owner.id);

    assert_eq!(products.list(owner.id).await.unwrap(), vec![product.clone()]);
    assert!(products.list(stranger.id).await.unwrap().is_empty());
    assert!(products.find(stranger.id, product.id).await.unwrap().is_none());

    let updated = products
        .update(owner.id, product.id, "Kettle XL", 30.0)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Kettle XL");
    assert_eq!(updated.created_at, product.created_at);

    let patch = PatchProductRequest {
        name: None,
        price: Some(28.0),
    };
    let patched = products.patch(owner.id, product.id, &patch).await.unwrap().unwrap();
    assert_eq!(patched.name, "Kettle XL");
    assert_eq!(patched.price, 28.0);

    assert!(products.patch(stranger.id, product.id, &patch).await.unwrap().is_none());
    assert!(!products.delete(stranger.id, product.id).await.unwrap());
    assert!(products.delete(owner.id, product.id).await.unwrap());
    assert!(products.find(owner.id, product.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_product_triple() {
    let _guard = SERIAL.lock().await;
    let db = fresh_database().await;
    let users = PgUserRepository::new(db.pool().clone(), TIMEOUT);
    let products = PgProductRepository::new(db.pool().clone(), TIMEOUT);

    let owner = users.create("dupes@example.com", "h").await.unwrap();
    products.create(owner.id, "Mug", 7.5).await.unwrap();

    assert_matches!(
        products.create(owner.id, "Mug", 7.5).await,
        Err(StoreError::UniqueViolation { .. })
    );
    products.create(owner.id, "Mug", 8.0).await.unwrap();
}

#[tokio::test]
async fn test_missing_rows() {
    let _guard = SERIAL.lock().await;
    let db = fresh_database().await;
    let products = PgProductRepository::new(db.pool().clone(), TIMEOUT);

    let nobody = Uuid::new_v4();
    assert!(products.find(nobody, Uuid::new_v4()).await.unwrap().is_none());
    assert!(products
        .update(nobody, Uuid::new_v4(), "x", 1.0)
        .await
        .unwrap()
        .is_none());
    assert!(!products.delete(nobody, Uuid::new_v4()).await.unwrap());
}
