//! HTML page route configuration.

use crate::state::AppState;
use crate::web::handlers::{form_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Browser routes.
///
/// # Endpoints
///
/// - `GET  /`         - Shortening form
/// - `POST /shorten`  - Form submission, renders the short URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(form_handler))
        .route("/shorten", post(shorten_form_handler))
}
