//! Auth gate integration tests
//!
//! Every protected route rejects requests without a valid bearer token
//! before the handler runs.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::assert_problem;
use crate::common::{create_test_user, generate_token_issued_at, test_server};

const PROTECTED: &[(&str, &str)] = &[
    ("GET", "/products"),
    ("POST", "/products"),
    ("GET", "/products/00000000-0000-0000-0000-000000000000"),
    ("PUT", "/products/00000000-0000-0000-0000-000000000000"),
    ("PATCH", "/products/00000000-0000-0000-0000-000000000000"),
    ("DELETE", "/products/00000000-0000-0000-0000-000000000000"),
    ("GET", "/users/id/00000000-0000-0000-0000-000000000000"),
    ("GET", "/users/email/test@example.com"),
];

#[tokio::test]
async fn test_every_protected_route_requires_header() {
    let server = test_server();
    for (method, path) in PROTECTED {
        let request = match *method {
            "GET" => server.get(path),
            "POST" => server.post(path),
            "PUT" => server.put(path),
            "PATCH" => server.patch(path),
            "DELETE" => server.delete(path),
            other => panic!("unexpected method {}", other),
        };
        let response = request.await;
        assert_problem!(response, StatusCode::UNAUTHORIZED, "Authorization header required");
    }
}

#[tokio::test]
async fn test_empty_bearer_token() {
    let server = test_server();
    let response = server
        .get("/products")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer "))
        .await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Invalid authorization header format");
}

#[tokio::test]
async fn test_non_bearer_scheme() {
    let server = test_server();
    let response = server
        .get("/products")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Token abc"))
        .await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Invalid authorization header format");
}

#[tokio::test]
async fn test_invalid_token() {
    let server = test_server();
    let response = server
        .get("/products")
        .authorization_bearer("definitely-not-a-jwt")
        .await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_token_from_other_secret() {
    use shopfront::backend::auth::TokenIssuer;
    use shopfront::shared::SigningSecret;

    let server = test_server();
    let token = TokenIssuer::new(&SigningSecret::new("some-other-secret").unwrap())
        .issue(Uuid::new_v4(), "a@example.com")
        .unwrap();
    let response = server.get("/products").authorization_bearer(&token).await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token() {
    let server = test_server();
    let token = generate_token_issued_at(
        Uuid::new_v4(),
        "a@example.com",
        Utc::now() - Duration::hours(25),
    );
    let response = server.get("/products").authorization_bearer(&token).await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Token has expired");
}

#[tokio::test]
async fn test_valid_token_identity_reaches_handler() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let created = server
        .post("/products")
        .authorization_bearer(&user.token)
        .json(&serde_json::json!({ "name": "Lamp", "price": 20.0 }))
        .await;
    assert_eq!(created.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = created.json();
    assert_eq!(body["user_id"], user.id.to_string());
}

#[tokio::test]
async fn test_public_routes_need_no_token() {
    let server = test_server();
    assert_eq!(server.get("/").await.status_code(), StatusCode::OK);

    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "a@example.com", "password": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<serde_json::Value>()["detail"], "Invalid credentials");
}
