//! Target URL validation.
//!
//! Accepts absolute HTTP(S) URLs with a host. The input is not rewritten: the
//! trimmed string is what gets stored and later sent as a redirect target.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL must not contain control characters")]
    ControlCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedScheme(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates `input` as an absolute URL and returns it trimmed.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for relative or malformed URLs,
/// [`UrlValidationError::UnsupportedScheme`] for anything but `http`/`https`
/// (`javascript:`, `data:`, `ftp:`...) and [`UrlValidationError::ControlCharacter`]
/// for inputs with tabs or newlines inside. The URL parser silently drops those,
/// so the stored string would differ from what was checked.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     validate_url("  https://example.com/page ").unwrap(),
///     "https://example.com/page"
/// );
/// assert!(validate_url("not a url").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(trimmed)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(UrlValidationError::UnsupportedScheme(other.to_string())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed),
        _ => Err(UrlValidationError::MissingHost),
    }
}
