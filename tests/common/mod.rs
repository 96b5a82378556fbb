#![allow(dead_code)]

use quicklink::application::services::DEFAULT_MAX_ATTEMPTS;
use quicklink::config::Config;
use quicklink::domain::entities::Identifier;
use quicklink::server::build_state;
use quicklink::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

pub fn test_config(id_length: usize) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        base_url: BASE_URL.to_string(),
        id_length,
        id_max_attempts: DEFAULT_MAX_ATTEMPTS,
        log_level: "info".to_string(),
        log_format: "text".to_string(),
    }
}

pub fn create_test_state() -> AppState {
    build_state(&test_config(6))
}

pub fn create_test_state_with_length(id_length: usize) -> AppState {
    build_state(&test_config(id_length))
}

/// Shortens `url` directly through the service and returns the identifier.
pub fn create_test_link(state: &AppState, url: &str) -> Identifier {
    state.shortener.shorten(url).unwrap().identifier
}
