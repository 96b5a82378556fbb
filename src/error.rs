//! Application error type and its HTTP representation.
//!
//! Every fallible core operation returns [`AppError`]. The HTTP layer turns it
//! into a JSON body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": { ... } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by the shortening core and its HTTP surface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The caller-supplied string is not an absolute URL with a host.
    #[error("Invalid URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The identifier is unknown, malformed, or only reserved.
    #[error("Short link not found: {id}")]
    NotFound { id: String },

    /// An identifier was bound twice. Indicates a broken reservation protocol.
    #[error("Identifier already bound: {id}")]
    DuplicateId { id: String },

    /// No free identifier could be allocated.
    #[error("Identifier space exhausted (length {length}, {attempts} attempts)")]
    ExhaustedIdSpace { length: usize, attempts: usize },

    /// Malformed request body.
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::ExhaustedIdSpace { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DuplicateId { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable form.
    ///
    /// Internal failures hide their details from clients.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            AppError::InvalidUrl { url, reason } => {
                ("invalid_url", json!({ "url": url, "reason": reason }))
            }
            AppError::NotFound { id } => ("not_found", json!({ "id": id })),
            AppError::DuplicateId { .. } => ("internal_error", json!({})),
            AppError::ExhaustedIdSpace { length, .. } => {
                ("id_space_exhausted", json!({ "length": length }))
            }
            AppError::Validation { details, .. } => ("validation_error", details.clone()),
            AppError::Internal { .. } => ("internal_error", json!({})),
        };

        let message = match self {
            AppError::DuplicateId { .. } | AppError::Internal { .. } => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Request validation failed",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
