//! HTTP backend abstraction for the board API.
//!
//! The backend only moves bytes: it sends a request and hands back the
//! status and body. Envelope decoding is a pure function shared by every
//! backend, so the fake used in tests goes through the same code path as
//! reqwest.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::BoardApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::Envelope;

// ============================================================================
// Request / Response
// ============================================================================

/// A request to the board API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub const fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response as received from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can execute board API requests.
///
/// This is an implementation detail - external code should use the
/// `BoardApiPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Execute a request and return the raw response.
    ///
    /// Non-success statuses are not errors at this level.
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse>;
}

// ============================================================================
// Envelope Decoding
// ============================================================================

/// Decode a response envelope into its `data` payload.
///
/// - a 2xx status with `success: true` yields `data` (or `null` when absent)
/// - an empty 2xx body counts as success without data
/// - `success: false` or a non-2xx status becomes `Rejected` when the
///   envelope carries a message, `RequestFailed` otherwise
pub fn decode_envelope<T: DeserializeOwned>(response: &RawResponse, url: &Url) -> ClientResult<T> {
    if response.is_success() && response.body.trim().is_empty() {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    let envelope = match serde_json::from_str::<Envelope>(&response.body) {
        Ok(envelope) => envelope,
        Err(_) if !response.is_success() => {
            return Err(ClientError::RequestFailed {
                status: response.status,
                url: url.to_string(),
            });
        }
        Err(e) => {
            return Err(ClientError::InvalidResponse {
                message: format!("expected response envelope: {e}"),
            });
        }
    };

    if !response.is_success() || !envelope.success {
        return Err(envelope.error_message().map_or_else(
            || ClientError::RequestFailed {
                status: response.status,
                url: url.to_string(),
            },
            |message| ClientError::Rejected {
                status: response.status,
                message: message.to_string(),
            },
        ));
    }

    Ok(serde_json::from_value(envelope.data.unwrap_or(Value::Null))?)
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Requests are sent exactly once.
pub struct ReqwestBackend {
    client: reqwest::Client,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &BoardApiConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            auth_token: config.token.clone(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
        debug!(method = %request.method, url = %request.url, "Board API request");

        let mut builder = self.client.request(request.method, request.url);
        if let Some(ref token) = self.auth_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, bytes = body.len(), "Board API response");
        Ok(RawResponse::new(status, body))
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// A fake HTTP backend that records requests and returns canned responses.
    ///
    /// Responses are matched on method and URL suffix; unmatched requests
    /// get a 404 with an error envelope.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        responses: Arc<Mutex<Vec<(Method, String, RawResponse)>>>,
        requests: Arc<Mutex<Vec<ApiRequest>>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for `method` on URLs ending with `path_suffix`.
        pub fn with_response(self, method: Method, path_suffix: &str, response: RawResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push((method, path_suffix.to_string(), response));
            self
        }

        /// Add a successful envelope wrapping `data`.
        pub fn with_data(self, method: Method, path_suffix: &str, data: Value) -> Self {
            let body = serde_json::json!({"success": true, "data": data}).to_string();
            self.with_response(method, path_suffix, RawResponse::new(200, body))
        }

        /// Requests received so far, in order.
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn execute(&self, request: ApiRequest) -> ClientResult<RawResponse> {
            let path = request.url.path().to_string();
            let method = request.method.clone();
            self.requests.lock().unwrap().push(request);

            let responses = self.responses.lock().unwrap();
            let found = responses
                .iter()
                .find(|(m, suffix, _)| *m == method && path.ends_with(suffix.as_str()))
                .map(|(_, _, response)| response.clone());

            Ok(found.unwrap_or_else(|| {
                RawResponse::new(404, r#"{"success":false,"error":{"message":"Not found"}}"#)
            }))
        }
    }
}
