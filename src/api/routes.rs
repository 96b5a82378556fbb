//! API route configuration.

use crate::api::handlers::{get_link_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /shorten`     - Shorten a URL
/// - `GET  /links/{id}`  - Look up the target of a short link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links/{id}", get(get_link_handler))
}
