use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    middleware::from_fn,
    routing::get,
    Extension, Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use restaurant_api::middleware::auth::require_auth;
use restaurant_lib::auth::JwtAuth;
use restaurant_lib::authorization::ActingUser;
use restaurant_lib::entities::User;

const SECRET: &str = "middleware-test-secret";

async fn whoami(Extension(actor): Extension<ActingUser>) -> String {
    actor.user_id.to_string()
}

fn protected_app(jwt: JwtAuth) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(from_fn(require_auth))
        .layer(Extension(Arc::new(jwt)))
}

fn user(id: Uuid) -> User {
    User {
        id,
        email: "user@test.pl".to_string(),
        nationality: None,
        date_of_birth: None,
        roles: vec!["User".to_string()],
    }
}

// ==================== REJECTION TESTS ====================

#[tokio::test]
async fn test_missing_header_is_unauthorized() {
    let app = protected_app(JwtAuth::new(SECRET, 3600));

    let response = app
        .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_header_is_unauthorized() {
    let app = protected_app(JwtAuth::new(SECRET, 3600));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let app = protected_app(JwtAuth::new(SECRET, 3600));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = protected_app(JwtAuth::new(SECRET, 3600));
    let foreign_token = JwtAuth::new("some-other-secret", 3600)
        .issue(&user(Uuid::new_v4()))
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {}", foreign_token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ==================== ACCEPTANCE TESTS ====================

#[tokio::test]
async fn test_valid_token_reaches_handler_with_identity() {
    let jwt = JwtAuth::new(SECRET, 3600);
    let user_id = Uuid::new_v4();
    let token = jwt.issue(&user(user_id)).unwrap();
    let app = protected_app(jwt);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(body, user_id.to_string().as_bytes());
}
