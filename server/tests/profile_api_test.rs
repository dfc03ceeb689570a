//! Tests for the auth-gated profile endpoints and the bearer-token
//! middleware, using the in-process identity provider and profile store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use skillet_core::llm::FakeProvider;
use skillet_server::identity::StaticTokenIdentity;
use skillet_server::profile::{InMemoryProfileStore, Profile};
use skillet_server::{app, AppState, Services};

fn test_app() -> axum::Router {
    let identity = StaticTokenIdentity::new("test-token", "tester");
    let profiles = InMemoryProfileStore::new();
    profiles.seed(
        identity.user().id,
        Profile {
            username: "tester".to_string(),
            full_name: None,
            email: None,
        },
    );

    let state: AppState = Arc::new(Services {
        provider: Arc::new(FakeProvider::default()),
        identity: Arc::new(identity),
        profiles: Arc::new(profiles),
    });
    app(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_profile_requires_auth() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing Authorization header");
}

#[tokio::test]
async fn test_profile_rejects_bad_token() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/profile")
                .header(header::AUTHORIZATION, "Bearer wrong-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_read_profile() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/profile")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "tester");
}

#[tokio::test]
async fn test_update_profile_merges_fields() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/profile")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"full_name": "Tess Ter", "email": "tess@example.com"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["username"], "tester");
    assert_eq!(body["full_name"], "Tess Ter");
    assert_eq!(body["email"], "tess@example.com");
}

#[tokio::test]
async fn test_update_rejects_empty_username() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/api/profile")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"username": "  "}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_authed_ping() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/test/ping")
                .header(header::AUTHORIZATION, "Bearer test-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "ping");
}
