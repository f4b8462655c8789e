//! Board API client.
//!
//! Endpoint methods are grouped by resource (`boards`, `credentials`,
//! `servers`) and return internal [`ClientResult`]s; `port.rs` maps them
//! onto the core port.

mod boards;
mod credentials;
mod servers;

use boardkit_core::ApiPortError;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::BoardApiConfig;
use crate::error::ClientResult;
use crate::http::{ApiRequest, HttpBackend, ReqwestBackend, decode_envelope};
use crate::port::map_error;
use crate::url::Endpoints;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default board API client using the reqwest HTTP backend.
pub type DefaultBoardApiClient = BoardApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the board REST API.
///
/// Generic over an HTTP backend for testing. Use [`DefaultBoardApiClient`]
/// in production code and talk to it through `BoardApiPort`.
pub struct BoardApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) endpoints: Endpoints,
}

impl DefaultBoardApiClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `ApiPortError::Configuration` when the base URL is not
    /// usable or the HTTP client cannot be built.
    pub fn new(config: &BoardApiConfig) -> Result<Self, ApiPortError> {
        let endpoints = Endpoints::parse(&config.base_url).map_err(map_error)?;
        let backend = ReqwestBackend::new(config).map_err(|e| ApiPortError::Configuration {
            message: e.to_string(),
        })?;
        Ok(Self { backend, endpoints })
    }
}

impl<B: HttpBackend> BoardApiClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(endpoints: Endpoints, backend: B) -> Self {
        Self { backend, endpoints }
    }

    /// Send a request without body and decode the envelope.
    pub(crate) async fn call<T: DeserializeOwned>(&self, method: Method, url: Url) -> ClientResult<T> {
        let response = self
            .backend
            .execute(ApiRequest::new(method, url.clone()))
            .await?;
        log_failure(&url, decode_envelope(&response, &url))
    }

    /// Send a request with a JSON body and decode the envelope.
    pub(crate) async fn call_with_body<T: DeserializeOwned, P: Serialize + Sync>(
        &self,
        method: Method,
        url: Url,
        body: &P,
    ) -> ClientResult<T> {
        let body = serde_json::to_value(body)?;
        let response = self
            .backend
            .execute(ApiRequest::new(method, url.clone()).with_body(body))
            .await?;
        log_failure(&url, decode_envelope(&response, &url))
    }
}

fn log_failure<T>(url: &Url, result: ClientResult<T>) -> ClientResult<T> {
    if let Err(ref e) = result {
        debug!(%url, status = ?e.status(), error = %e, "Board API request failed");
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;

    pub fn client(backend: FakeBackend) -> BoardApiClient<FakeBackend> {
        let endpoints = Endpoints::parse("http://localhost:3001/api").unwrap();
        BoardApiClient::with_backend(endpoints, backend)
    }

    #[test]
    fn test_default_client_creation() {
        assert!(DefaultBoardApiClient::new(&BoardApiConfig::new()).is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let config = BoardApiConfig::new().with_base_url("::not a url::");
        assert!(matches!(
            DefaultBoardApiClient::new(&config),
            Err(ApiPortError::Configuration { .. })
        ));
    }
}
