//! User lookup API integration tests

use axum::http::StatusCode;
use shopfront::backend::auth::UserResponse;
use uuid::Uuid;

use crate::assert_problem;
use crate::common::{create_test_user, generate_test_token, test_server};

#[tokio::test]
async fn test_get_user_by_id() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get(&format!("/users/id/{}", user.id))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.id, user.id);
    assert_eq!(body.email, user.email);
    assert!(!response.text().contains("password"));
}

#[tokio::test]
async fn test_get_user_by_email() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get(&format!("/users/email/{}", user.email))
        .authorization_bearer(&user.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UserResponse = response.json();
    assert_eq!(body.id, user.id);
}

#[tokio::test]
async fn test_unknown_user_messages() {
    let server = test_server();
    let token = generate_test_token(Uuid::new_v4(), "ghost@example.com");

    let by_id = server
        .get(&format!("/users/id/{}", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;
    assert_problem!(by_id, StatusCode::NOT_FOUND, "User not found");

    let by_email = server
        .get("/users/email/nobody@example.com")
        .authorization_bearer(&token)
        .await;
    assert_problem!(by_email, StatusCode::NOT_FOUND, "User with this email is not found");
}

#[tokio::test]
async fn test_bad_user_id() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get("/users/id/12345")
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(response, StatusCode::BAD_REQUEST, "Invalid UUID format");
}

#[tokio::test]
async fn test_user_lookup_requires_token() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server.get(&format!("/users/id/{}", user.id)).await;
    assert_problem!(response, StatusCode::UNAUTHORIZED, "Authorization header required");
}

#[tokio::test]
async fn test_undecodable_email_segment_is_problem_400() {
    let server = test_server();
    let user = create_test_user(&server).await;

    let response = server
        .get("/users/email/%FF")
        .authorization_bearer(&user.token)
        .await;
    assert_problem!(response, StatusCode::BAD_REQUEST, "Invalid path parameter");
}
