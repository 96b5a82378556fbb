//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with store usage.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<StoreUsage>,
}

/// Identifier allocation figures.
#[derive(Debug, Serialize)]
pub struct StoreUsage {
    pub entries: usize,
    pub reserved: usize,
    pub id_length: usize,
    pub id_space: u64,
}
