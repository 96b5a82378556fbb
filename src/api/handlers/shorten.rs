//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "identifier": "a1b2c3",
///   "short_url": "https://s.example.com/a1b2c3"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body fails validation or the URL is invalid
/// - 503 Service Unavailable if no identifier can be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let result = state.shortener.shorten(&payload.url)?;

    Ok(Json(result.into()))
}
