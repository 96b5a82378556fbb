//! Shortening form page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the start page with the URL input form.
#[derive(Template, WebTemplate)]
#[template(path = "form.html")]
pub struct FormTemplate {}

/// Renders the shortening form.
///
/// # Endpoint
///
/// `GET /`
pub async fn form_handler() -> impl IntoResponse {
    FormTemplate {}
}
