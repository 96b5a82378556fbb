//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://s.example.com"
//! export ID_LENGTH="6"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix for generated short URLs (default: `http://localhost:3000`)
//! - `ID_LENGTH` - Identifier length, 1-12 (default: 6)
//! - `ID_MAX_ATTEMPTS` - Collision retries per request, 1-10000 (default: 32)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use url::Url;

use crate::application::services::DEFAULT_MAX_ATTEMPTS;
use crate::domain::entities::{DEFAULT_LENGTH, id_space_size};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Scheme and authority that prefix every short URL.
    pub base_url: String,
    pub id_length: usize,
    /// Upper bound on identifier collisions tolerated by one shorten request.
    pub id_max_attempts: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let id_length = parse_var("ID_LENGTH", DEFAULT_LENGTH)?;
        let id_max_attempts = parse_var("ID_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;

        Ok(Self {
            listen_addr,
            base_url,
            id_length,
            id_max_attempts,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an absolute http(s) URL
    /// - `id_length` is outside 1-12
    /// - `id_max_attempts` is outside 1-10000
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            anyhow::bail!(
                "BASE_URL must be an http(s) URL with a host, got '{}'",
                self.base_url
            );
        }

        if !(1..=12).contains(&self.id_length) {
            anyhow::bail!(
                "ID_LENGTH must be between 1 and 12, got {}",
                self.id_length
            );
        }

        if !(1..=10_000).contains(&self.id_max_attempts) {
            anyhow::bail!(
                "ID_MAX_ATTEMPTS must be between 1 and 10000, got {}",
                self.id_max_attempts
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Identifier length: {} ({} identifiers)",
            self.id_length,
            id_space_size(self.id_length)
        );
        tracing::info!("  Max allocation attempts: {}", self.id_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "https://s.example.com".to_string(),
            id_length: 6,
            id_max_attempts: 32,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.id_length = 0;
        assert!(config.validate().is_err());
        config.id_length = 13;
        assert!(config.validate().is_err());
        config.id_length = 1;
        assert!(config.validate().is_ok());

        config.id_max_attempts = 0;
        assert!(config.validate().is_err());
        config.id_max_attempts = 32;
    }

    #[test]
    fn test_base_url_validation() {
        let mut config = valid_config();

        config.base_url = "s.example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "ftp://s.example.com".to_string();
        assert!(config.validate().is_err());

        config.base_url = "http://localhost:3000/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("ID_LENGTH");
            env::remove_var("ID_MAX_ATTEMPTS");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.id_length, 6);
        assert_eq!(config.id_max_attempts, 32);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("ID_LENGTH", "8");
            env::set_var("ID_MAX_ATTEMPTS", " 100 ");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.base_url, "https://s.example.com");
        assert_eq!(config.id_length, 8);
        assert_eq!(config.id_max_attempts, 100);

        // Cleanup
        unsafe {
            env::remove_var("BASE_URL");
            env::remove_var("ID_LENGTH");
            env::remove_var("ID_MAX_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_length() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("ID_LENGTH", "six");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("ID_LENGTH"));

        // Cleanup
        unsafe {
            env::remove_var("ID_LENGTH");
        }
    }
}
