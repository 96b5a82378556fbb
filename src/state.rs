//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::id_generator::RandomIdGenerator;
use crate::infrastructure::memory::InMemoryMappingStore;

/// The shortener as wired by the server: in-memory store, random identifiers.
pub type AppShortener = ShortenerService<InMemoryMappingStore, RandomIdGenerator>;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<AppShortener>,
}

impl AppState {
    pub fn new(shortener: Arc<AppShortener>) -> Self {
        Self { shortener }
    }
}
