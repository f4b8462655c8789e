//! Public configuration for the board API client.

use std::time::Duration;

/// Default base URL of the board API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

/// Configuration for the board API client.
///
/// # Example
///
/// ```
/// use boardkit_http::BoardApiConfig;
/// use std::time::Duration;
///
/// let config = BoardApiConfig::new()
///     .with_base_url("https://boards.example.com/api")
///     .with_timeout(Duration::from_secs(10))
///     .with_token("secret");
/// assert_eq!(config.base_url(), "https://boards.example.com/api");
/// ```
#[derive(Clone)]
pub struct BoardApiConfig {
    /// Base URL every endpoint path is appended to
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
}

impl Default for BoardApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("boardkit-http/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl BoardApiConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the board API.
    ///
    /// Defaults to `http://localhost:3001/api`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a bearer token sent with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The configured request timeout.
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for BoardApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardApiConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardApiConfig::new();
        assert_eq!(config.base_url, "http://localhost:3001/api");
        assert!(config.user_agent.contains("boardkit-http"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardApiConfig::new()
            .with_base_url("https://custom.api/")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60))
            .with_token("secret");

        assert_eq!(config.base_url(), "https://custom.api/");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.token, Some("secret".to_string()));
    }

    #[test]
    fn test_optional_token() {
        let with_token = BoardApiConfig::new().with_optional_token(Some("token".to_string()));
        assert_eq!(with_token.token, Some("token".to_string()));

        let without_token = BoardApiConfig::new().with_optional_token(None);
        assert!(without_token.token.is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = BoardApiConfig::new().with_token("super-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
