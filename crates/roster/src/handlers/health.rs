//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage round trip

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::storage::Statement;

use crate::{state::AppState, storage::sqlite::schema};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Runs a trivial query through the gateway.
///
/// Returns 200 if the store answers, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.gateway.query(Statement::new(schema::PING)).await {
        Ok(_) => (StatusCode::OK, Json(serde_json::json!({ "healthy": true }))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "healthy": false,
                    "error": "Storage unavailable"
                })),
            )
                .into_response()
        }
    }
}
