//! Router-level tests: dispatch, status reporting, and the JSON 404.
//!
//! These never leave the process; the callback route is only exercised on
//! paths that fail before any outbound call.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use facebook_oauth_callback::client::GraphClient;
use facebook_oauth_callback::config::Config;
use facebook_oauth_callback::exchange::CallbackExchange;
use facebook_oauth_callback::server::{AppState, create_router};
use facebook_oauth_callback::store::MemoryUserStore;

fn build_router(config: Config) -> axum::Router {
    let client = Arc::new(GraphClient::new(&config).unwrap());
    let store = Arc::new(MemoryUserStore::new());
    let exchange = CallbackExchange::new(client, store, config.subject_id.clone());
    create_router(Arc::new(AppState { config, exchange }))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

// ─── Status endpoint ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_with_no_configuration() {
    let app = build_router(Config::default());

    let response =
        app.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["status"], "running");
    assert_eq!(json["environment"]["facebook_app_id_set"], false);
    assert_eq!(json["environment"]["facebook_app_secret_set"], false);
    assert_eq!(json["environment"]["redirect_uri_set"], false);
    assert_eq!(json["environment"]["user_id_set"], false);
}

#[tokio::test]
async fn test_status_reports_flags_not_values() {
    let config = Config::new(
        Some("app-id-123".to_string()),
        Some("super-secret".to_string()),
        None,
        None,
    );
    let app = build_router(config);

    let response =
        app.oneshot(Request::get("/api").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await;
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(json["environment"]["facebook_app_id_set"], true);
    assert_eq!(json["environment"]["facebook_app_secret_set"], true);
    assert_eq!(json["environment"]["redirect_uri_set"], false);
    // The actual credentials never appear in the body.
    assert!(!text.contains("app-id-123"));
    assert!(!text.contains("super-secret"));
}

// ─── Not found ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unmapped_path_is_json_404() {
    let app = build_router(Config::default());

    let response =
        app.oneshot(Request::get("/foo").body(Body::empty()).unwrap()).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not found");
    assert_eq!(json["path"], "/foo");
}

#[tokio::test]
async fn test_callback_without_provider_segment_is_404() {
    let app = build_router(Config::default());

    let response = app
        .oneshot(Request::get("/api/callback").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ─── Callback paths that fail before any outbound call ──────────────────────

#[tokio::test]
async fn test_callback_with_provider_error() {
    let app = build_router(Config::default());

    let response = app
        .oneshot(
            Request::get("/api/facebook/callback?error=access_denied")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Deliberately 200: the popup renders the message itself.
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Authorization Failed"));
    assert!(html.contains("access_denied"));
}

#[tokio::test]
async fn test_callback_error_wins_over_code() {
    let app = build_router(Config::default());

    let response = app
        .oneshot(
            Request::get("/api/facebook/callback?code=abc123&error=user_cancelled")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Authorization Failed"));
    assert!(html.contains("user_cancelled"));
}

#[tokio::test]
async fn test_callback_without_code_or_error() {
    let app = build_router(Config::default());

    let response = app
        .oneshot(Request::get("/api/facebook/callback").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Authorization Failed"));
    assert!(html.contains("Missing authorization code"));
}

#[tokio::test]
async fn test_callback_escapes_provider_error_text() {
    let app = build_router(Config::default());

    let response = app
        .oneshot(
            Request::get("/api/facebook/callback?error=%3Cscript%3Ealert(1)%3C%2Fscript%3E")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_text(response).await;
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}
