//! # quicklink
//!
//! A small URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Identifiers, entries, generator and store traits
//! - **Application Layer** ([`application`]) - Shortening and resolution logic
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory mapping store
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form and result pages
//!
//! ## Guarantees
//!
//! - Shortening the same URL always returns the same identifier
//! - Identifiers are reserved before they are bound, so concurrent requests
//!   never share one
//! - Allocation fails with an error instead of looping once the identifier
//!   space is full
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ResolveResult, ShortenResult, ShortenerService};
    pub use crate::domain::entities::{Entry, Identifier};
    pub use crate::domain::id_generator::{IdGenerator, RandomIdGenerator};
    pub use crate::domain::repositories::{MappingStore, StoreStats};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryMappingStore;
    pub use crate::state::AppState;
}
