//! Product API integration tests
//!
//! CRUD over `/products` and the per-user scoping every query carries.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use shopfront::backend::products::Product;
use uuid::Uuid;

use crate::assert_problem;
use crate::common::{create_test_user, test_server};

async fn create_product(server: &TestServer, token: &str, name: &str, price: f64) -> Product {
    let response = server
        .post("/products")
        .authorization_bearer(token)
        .json(&serde_json::json!({ "name": name, "price": price }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json()
}

#[tokio::test]
async fn test_list_starts_empty() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server.get("/products").authorization_bearer(&user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text().trim(), "[]");
}

#[tokio::test]
async fn test_product_lifecycle() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let created = create_product(&server, &user.token, "Desk Lamp", 19.99).await;
    assert_eq!(created.name, "Desk Lamp");
    assert_eq!(created.price, 19.99);
    assert_eq!(created.user_id, user.id);

    let listed: Vec<Product> = server
        .get("/products")
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(listed, vec![created.clone()]);

    let fetched: Product = server
        .get(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .await
        .json();
    assert_eq!(fetched, created);

    let replaced = server
        .put(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({ "name": "Floor Lamp", "price": 49.5 }))
        .await;
    assert_eq!(replaced.status_code(), StatusCode::OK);
    let replaced: Product = replaced.json();
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Floor Lamp");
    assert_eq!(replaced.price, 49.5);
    assert_eq!(replaced.created_at, created.created_at);
    assert!(replaced.updated_at >= created.updated_at);

    let patched = server
        .patch(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({ "price": 45.0 }))
        .await;
    assert_eq!(patched.status_code(), StatusCode::OK);
    let patched: Product = patched.json();
    assert_eq!(patched.name, "Floor Lamp");
    assert_eq!(patched.price, 45.0);

    let deleted = server
        .delete(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(deleted.status_code(), StatusCode::NO_CONTENT);
    assert!(deleted.text().is_empty());

    let gone = server
        .get(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(gone, StatusCode::NOT_FOUND, "Product not found");

    let deleted_again = server
        .delete(&format!("/products/{}", created.id))
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(deleted_again, StatusCode::NOT_FOUND, "Product not found");
}

#[tokio::test]
async fn test_products_are_invisible_to_other_users() {
    let server = test_server();
    let owner = create_test_user(&server).await;
    let stranger = create_test_user(&server).await;

    let product = create_product(&server, &owner.token, "Chair", 80.0).await;
    let path = format!("/products/{}", product.id);

    let listed: Vec<Product> = server
        .get("/products")
        .authorization_bearer(&stranger.token)
        .await
        .json();
    assert!(listed.is_empty());

    let get = server.get(&path).authorization_bearer(&stranger.token).await;
    assert_problem!(get, StatusCode::NOT_FOUND, "Product not found");

    let put = server
        .put(&path)
        .authorization_bearer(&stranger.token)
        .json(&serde_json::json!({ "name": "Mine now", "price": 1.0 }))
        .await;
    assert_problem!(put, StatusCode::NOT_FOUND, "Product not found");

    let patch = server
        .patch(&path)
        .authorization_bearer(&stranger.token)
        .json(&serde_json::json!({ "name": "Mine now" }))
        .await;
    assert_problem!(patch, StatusCode::NOT_FOUND, "Product not found");

    let delete = server.delete(&path).authorization_bearer(&stranger.token).await;
    assert_problem!(delete, StatusCode::NOT_FOUND, "Product not found");

    // Owner still sees it untouched
    let fetched: Product = server.get(&path).authorization_bearer(&owner.token).await.json();
    assert_eq!(fetched, product);
}

#[tokio::test]
async fn test_missing_product_is_404() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get(&format!("/products/{}", Uuid::new_v4()))
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(response, StatusCode::NOT_FOUND, "Product not found");
}

#[tokio::test]
async fn test_duplicate_product_conflicts() {
    let server = test_server();
    let user = create_test_user(&server).await;
    create_product(&server, &user.token, "Mug", 7.5).await;

    let response = server
        .post("/products")
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({ "name": "Mug", "price": 7.5 }))
        .await;
    assert_problem!(response, StatusCode::CONFLICT, "Product already exists");

    // Same name at another price is a different product
    create_product(&server, &user.token, "Mug", 8.0).await;
}

#[tokio::test]
async fn test_same_product_for_different_users() {
    let server = test_server();
    let first = create_test_user(&server).await;
    let second = create_test_user(&server).await;

    create_product(&server, &first.token, "Mug", 7.5).await;
    create_product(&server, &second.token, "Mug", 7.5).await;
}

#[tokio::test]
async fn test_update_into_existing_product_conflicts() {
    let server = test_server();
    let user = create_test_user(&server).await;
    create_product(&server, &user.token, "Mug", 7.5).await;
    let other = create_product(&server, &user.token, "Cup", 5.0).await;

    let response = server
        .put(&format!("/products/{}", other.id))
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({ "name": "Mug", "price": 7.5 }))
        .await;
    assert_problem!(response, StatusCode::CONFLICT, "Product already exists");
}

#[tokio::test]
async fn test_bad_product_id_is_400() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get("/products/not-a-uuid")
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(response, StatusCode::BAD_REQUEST, "Invalid UUID format");
}
