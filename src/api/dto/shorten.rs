//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ShortenResult;

/// Request to shorten a single URL.
///
/// Only the length is checked here; URL syntax is validated by the service.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,
}

/// Response for a shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub identifier: String,
    pub short_url: String,
}

impl From<ShortenResult> for ShortenResponse {
    fn from(result: ShortenResult) -> Self {
        Self {
            identifier: result.identifier.into(),
            short_url: result.short_url,
        }
    }
}
