//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the dialogue endpoints with request tracing and a
//! per-request timeout.

pub mod dialogue;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use dialogue::{dialogue_routes, DialogueHandlers};

/// Builds the complete application router.
pub fn app_router(handlers: DialogueHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(dialogue_routes(handlers))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
