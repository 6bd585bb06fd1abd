//! HTTP API layer with Axum routes and error mapping.
//!
//! This crate provides:
//! - REST API routes over the ledger service
//! - Request extractors with validation
//! - Error-to-response mapping

pub mod error;
pub mod extractors;
pub mod routes;

use std::any::Any;
use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Response},
};
use ledger_core::LedgerService;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide ledger.
    pub ledger: Arc<LedgerService>,
}

impl AppState {
    /// Wraps a ledger for sharing between handlers.
    #[must_use]
    pub fn new(ledger: LedgerService) -> Self {
        Self {
            ledger: Arc::new(ledger),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .with_state(state)
}

/// Turns a handler panic into the generic 500 response.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
