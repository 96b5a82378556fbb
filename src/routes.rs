//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`          - Shortening form
//! - `POST /shorten`   - Form submission
//! - `GET  /{id}`      - Short link redirect
//! - `GET  /health`    - Health check with store usage
//! - `/api/*`          - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::domain::entities::Identifier;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// First path segments served by static routes. A short link with one of
/// these names would be shadowed, so they are never allocated.
pub const STATIC_SEGMENTS: [&str; 3] = ["api", "health", "shorten"];

/// [`STATIC_SEGMENTS`] as identifiers.
pub fn static_segment_ids() -> impl Iterator<Item = Identifier> {
    STATIC_SEGMENTS
        .iter()
        .filter_map(|segment| Identifier::parse(segment).ok())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(web::routes::routes())
        .nest("/api", api::routes::routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
