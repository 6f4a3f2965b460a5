//! Configuration management for the search agent.
//!
//! Configuration can be set via environment variables:
//! - `BRAVE_API_KEY` - Required for searching. The Brave Search subscription token.
//!   Its absence is reported by the search tool, not at load time.
//! - `BRAVE_SEARCH_ENDPOINT` - Optional. Overrides the web search endpoint.
//!   Defaults to `https://api.search.brave.com/res/v1/web/search`.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Brave web search endpoint.
pub const BRAVE_API_ENDPOINT: &str = "https://api.search.brave.com/res/v1/web/search";

/// Timeout applied to every search request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Search tool configuration.
#[derive(Clone)]
pub struct SearchConfig {
    /// Brave Search subscription token
    pub api_key: Option<String>,

    /// Web search endpoint
    pub endpoint: Url,

    /// Request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SearchConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `BRAVE_SEARCH_ENDPOINT` is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("BRAVE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let endpoint = match std::env::var("BRAVE_SEARCH_ENDPOINT") {
            Ok(raw) if !raw.trim().is_empty() => parse_endpoint("BRAVE_SEARCH_ENDPOINT", &raw)?,
            _ => default_endpoint(),
        };

        Ok(Self {
            api_key,
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a config with the default endpoint and timeout (useful for testing).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            endpoint: default_endpoint(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// A config with no credential.
    pub fn without_api_key() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point requests at a different endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `endpoint` is not an absolute http(s) URL.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint("endpoint", endpoint)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The credential, if one is configured.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("BRAVE_API_KEY".to_string()))
    }
}

fn default_endpoint() -> Url {
    Url::parse(BRAVE_API_ENDPOINT).expect("BRAVE_API_ENDPOINT is a valid URL")
}

fn parse_endpoint(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("unsupported scheme: {}", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn from_env_reads_key_and_defaults() {
        env::set_var("BRAVE_API_KEY", "test_key");
        env::remove_var("BRAVE_SEARCH_ENDPOINT");

        let config = SearchConfig::from_env().unwrap();

        assert_eq!(config.api_key.as_deref(), Some("test_key"));
        assert_eq!(config.endpoint.as_str(), BRAVE_API_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(10));

        env::remove_var("BRAVE_API_KEY");
    }

    #[test]
    #[serial]
    fn missing_key_is_not_a_load_error() {
        env::remove_var("BRAVE_API_KEY");
        env::remove_var("BRAVE_SEARCH_ENDPOINT");

        let config = SearchConfig::from_env().unwrap();
        assert!(config.api_key.is_none());
        assert!(matches!(config.api_key(), Err(ConfigError::MissingEnvVar(_))));
    }

    #[test]
    #[serial]
    fn blank_key_counts_as_missing() {
        env::set_var("BRAVE_API_KEY", "   ");
        let config = SearchConfig::from_env().unwrap();
        assert!(config.api_key.is_none());
        env::remove_var("BRAVE_API_KEY");
    }

    #[test]
    #[serial]
    fn invalid_endpoint_override_is_rejected() {
        env::set_var("BRAVE_SEARCH_ENDPOINT", "not a url");
        let err = SearchConfig::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name, _) if name == "BRAVE_SEARCH_ENDPOINT"));
        env::remove_var("BRAVE_SEARCH_ENDPOINT");
    }

    #[test]
    fn with_endpoint_rejects_non_http_schemes() {
        let result = SearchConfig::new("key").with_endpoint("ftp://example.com/search");
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = SearchConfig::new("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
