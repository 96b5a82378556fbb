//! Form submission handler and result pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Form body posted by `templates/form.html`.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

/// Confirmation page showing the original and the short URL.
#[derive(Template, WebTemplate)]
#[template(path = "shortened.html")]
pub struct ShortenedTemplate {
    pub url: String,
    pub short_url: String,
}

/// Page rendered for unknown short links.
#[derive(Template, WebTemplate)]
#[template(path = "invalid_link.html")]
pub struct InvalidLinkTemplate {}

/// Page rendered when a form submission is rejected.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

/// Shortens the submitted URL and renders the confirmation page.
///
/// # Endpoint
///
/// `POST /shorten` (`application/x-www-form-urlencoded`, field `url`)
///
/// Errors are rendered as an HTML page with the status from
/// [`AppError::status_code`].
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Response {
    match state.shortener.shorten(&form.url) {
        Ok(result) => ShortenedTemplate {
            url: form.url.trim().to_string(),
            short_url: result.short_url,
        }
        .into_response(),
        Err(err) => {
            let message = match &err {
                AppError::InvalidUrl { .. } => "Invalid data.".to_string(),
                other => other.to_error_info().message,
            };
            (err.status_code(), ErrorTemplate { message }).into_response()
        }
    }
}
