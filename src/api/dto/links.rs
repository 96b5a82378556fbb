//! DTOs for link lookup.

use serde::Serialize;

/// A resolved short link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub identifier: String,
    pub url: String,
}
