//! Client-side configuration for reaching the Herald API.
//!
//! The API base URL is supplied at runtime by the hosting page rather than
//! compiled into the bundle. The frontend reads it once at startup and hands
//! a [`ClientConfig`] to the components that need it.

use crate::log;

/// Endpoint, relative to the API base URL, that serves the greeting message.
pub const MESSAGE_ENDPOINT: &str = "/message";

/// Key of the base URL in the runtime configuration object.
pub const API_BASE_URL_KEY: &str = "API_BASE_URL";

/// Older deployments write the base URL under this key.
pub const LEGACY_API_URL_KEY: &str = "REACT_APP_API_URL";

/// Used when the runtime configuration does not provide a base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Joins a base URL and an endpoint with exactly one `/` between them.
///
/// # Example
/// ```
/// use herald::config::join_url;
///
/// assert_eq!(join_url("https://api.example.com/", "/message"), "https://api.example.com/message");
/// assert_eq!(join_url("", "/message"), "/message");
/// ```
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
}

impl ClientConfig {
    /// Creates a config from a base URL, trimming whitespace and trailing slashes.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the config from the values found in the runtime configuration.
    ///
    /// `primary` wins over `legacy`. An explicitly empty value is kept and
    /// yields same-origin relative URLs; only a missing value falls back to
    /// [`DEFAULT_API_BASE_URL`].
    pub fn from_sources(primary: Option<String>, legacy: Option<String>) -> Self {
        match (primary, legacy) {
            (Some(url), _) => Self::new(url),
            (None, Some(url)) => {
                log::debug!("{API_BASE_URL_KEY} not set, using {LEGACY_API_URL_KEY}");
                Self::new(url)
            }
            (None, None) => {
                log::warn!(
                    "No API base URL configured, falling back to {}",
                    DEFAULT_API_BASE_URL
                );
                Self::default()
            }
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Full URL of the message endpoint.
    pub fn message_url(&self) -> String {
        join_url(&self.api_base_url, MESSAGE_ENDPOINT)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_url_appends_endpoint() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.message_url(), "https://api.example.com/message");
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        let config = ClientConfig::new("https://api.example.com//");
        assert_eq!(config.api_base_url(), "https://api.example.com");
        assert_eq!(config.message_url(), "https://api.example.com/message");
    }

    #[test]
    fn base_path_is_preserved() {
        let config = ClientConfig::new("  http://localhost:8000/api/ ");
        assert_eq!(config.message_url(), "http://localhost:8000/api/message");
    }

    #[test]
    fn empty_base_gives_relative_url() {
        let config = ClientConfig::new("");
        assert_eq!(config.message_url(), "/message");
    }

    #[test]
    fn primary_source_wins() {
        let config = ClientConfig::from_sources(
            Some("https://primary.example.com".to_string()),
            Some("https://legacy.example.com".to_string()),
        );
        assert_eq!(config.api_base_url(), "https://primary.example.com");
    }

    #[test]
    fn legacy_source_is_used_when_primary_missing() {
        let config =
            ClientConfig::from_sources(None, Some("https://legacy.example.com".to_string()));
        assert_eq!(config.api_base_url(), "https://legacy.example.com");
    }

    #[test]
    fn missing_sources_fall_back_to_default() {
        let config = ClientConfig::from_sources(None, None);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.message_url(), "http://localhost:8000/api/message");
    }

    #[test]
    fn explicit_empty_primary_is_kept() {
        let config = ClientConfig::from_sources(Some(String::new()), None);
        assert_eq!(config.message_url(), "/message");
    }
}
