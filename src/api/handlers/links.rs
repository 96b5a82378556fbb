//! Handler for link lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the target URL of a short link without redirecting.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found for unknown identifiers.
pub async fn get_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let resolved = state.shortener.resolve(&id)?;

    Ok(Json(LinkResponse {
        identifier: id,
        url: resolved.url,
    }))
}
