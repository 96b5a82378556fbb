//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, StoreUsage};
use crate::state::AppState;

/// Returns service health status with store usage.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Store reachable and identifiers available
/// - **503 Service Unavailable**: Store error or identifier space exhausted
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": {
///       "status": "ok",
///       "usage": { "entries": 12, "reserved": 0, "id_length": 6, "id_space": 2176782336 }
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state);
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Reads store usage and flags a full identifier space.
fn check_store(state: &AppState) -> CheckStatus {
    match state.shortener.stats() {
        Ok(stats) => {
            let exhausted = (stats.entries + stats.reserved) as u64 >= stats.id_space;
            CheckStatus {
                status: if exhausted { "error" } else { "ok" }.to_string(),
                message: exhausted.then(|| "Identifier space exhausted".to_string()),
                usage: Some(StoreUsage {
                    entries: stats.entries,
                    reserved: stats.reserved,
                    id_length: stats.id_length,
                    id_space: stats.id_space,
                }),
            }
        }
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
            usage: None,
        },
    }
}
