//! HTTP API server for passage-archive.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use passage_archive_core::{
    env_config::ENV_LIST_LIMIT, env_parse_with_default, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
use passage_archive_service::RegistrationService;

pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Registration workflow over the record store
    pub service: Arc<RegistrationService>,
    /// Listing size when a request gives no `limit`
    pub default_list_limit: usize,
}

impl AppState {
    /// State with the default listing size taken from the environment.
    #[must_use]
    pub fn new(service: Arc<RegistrationService>) -> Self {
        let default_list_limit =
            env_parse_with_default(ENV_LIST_LIMIT, DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
        Self { service, default_list_limit }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route(
            "/api/records",
            get(handlers::records::list_records).post(handlers::records::submit_record),
        )
        .route("/api/options/textbooks", get(handlers::options::textbooks))
        .route("/api/options/units", get(handlers::options::units))
        .route("/api/options/mock-exam", get(handlers::options::mock_exam))
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadinessResponse>) {
    match state.service.check().await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ReadinessResponse { status: "ready", rows: Some(rows), message: None }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable",
                    rows: None,
                    message: Some("record store unreachable".to_owned()),
                }),
            )
        },
    }
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
