//! Health check that also confirms the ledger can still be read.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use tracing::error;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `UP` when the ledger answers, `DOWN` otherwise.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Accepted transactions so far; absent when the ledger is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<usize>,
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let version = env!("CARGO_PKG_VERSION");
    match state.ledger.transaction_count() {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "UP",
                version,
                transactions: Some(count),
            }),
        ),
        Err(e) => {
            error!(error = %e, "Ledger failed health check");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "DOWN",
                    version,
                    transactions: None,
                }),
            )
        }
    }
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
