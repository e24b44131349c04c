//! HTTP surface of the callback server.
//!
//! Three routes, all GET: `/` and `/api` report configuration status,
//! `/api/{provider}/callback` runs the exchange sequence, and everything
//! else is a JSON 404. A panic-catching layer turns any escaped panic into
//! a JSON 500 so nothing reaches the transport raw.

use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::pages;
use crate::config::Config;
use crate::exchange::CallbackExchange;
use crate::models::CallbackParams;

/// Shared state for HTTP handlers.
pub struct AppState {
    pub config: Config,
    pub exchange: CallbackExchange,
}

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_status))
        .route("/api", get(handle_status))
        .route("/api/{provider}/callback", get(handle_callback))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// `GET /` and `GET /api`
///
/// Reports whether each configuration value is set, never the values.
async fn handle_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Facebook OAuth Callback Server",
        "status": "running",
        "deployment": "standalone",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": {
            "facebook_app_id_set": state.config.has_app_id(),
            "facebook_app_secret_set": state.config.has_app_secret(),
            "redirect_uri_set": state.config.has_redirect_uri(),
            "user_id_set": state.config.has_subject_id(),
        }
    }))
}

/// `GET /api/{provider}/callback`
///
/// Runs the exchange sequence and renders its outcome. Always 200: the
/// popup window displays the page, success or failure.
async fn handle_callback(
    State(state): State<Arc<AppState>>,
    Path(provider): Path<String>,
    Query(params): Query<CallbackParams>,
) -> Html<String> {
    tracing::info!(provider = %provider, has_code = params.code.is_some(), "OAuth callback received");

    match state.exchange.run(&params).await {
        Ok(granted) => {
            Html(pages::render_success_page(&granted.pages, granted.subject_id.as_deref()))
        }
        Err(failure) => Html(pages::render_failure_page(failure.title(), &failure.detail())),
    }
}

/// Fallback for unmapped paths.
async fn handle_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not found",
            "path": uri.path(),
        })),
    )
}

/// Convert an escaped panic into the JSON 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(message = %message, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": "Internal server error",
            "message": message,
        })),
    )
        .into_response()
}
