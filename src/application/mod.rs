//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers a small API.
//!
//! - [`services::shortener_service::ShortenerService`] - Shortening and resolution
pub mod services;
