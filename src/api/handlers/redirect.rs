//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::InvalidLinkTemplate;

/// Redirects an identifier to its original URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Response
///
/// - **307 Temporary Redirect** to the target URL
/// - **404 Not Found** with the "Invalid link." page for unknown or reserved
///   identifiers
pub async fn redirect_handler(Path(id): Path<String>, State(state): State<AppState>) -> Response {
    match state.shortener.resolve(&id) {
        Ok(resolved) => Redirect::temporary(&resolved.url).into_response(),
        Err(err @ AppError::NotFound { .. }) => {
            debug!(id = %id, "Unknown short link");
            (err.status_code(), InvalidLinkTemplate {}).into_response()
        }
        Err(err) => err.into_response(),
    }
}
