//! Internal wire types for the board API.
//!
//! Domain payloads (credentials, servers, boards) deserialize straight
//! into `boardkit-core` types; only the envelope and request bodies that
//! have no domain counterpart live here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response wrapper used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<EnvelopeError>,
}

/// Error payload inside an [`Envelope`].
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeError {
    pub message: String,
}

impl Envelope {
    /// Error message carried by the envelope, if non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|error| error.message.as_str())
            .filter(|message| !message.trim().is_empty())
    }
}

/// Body of `PATCH boards/{board}`.
#[derive(Debug, Clone, Serialize)]
pub struct RenameBoardRequest<'a> {
    pub name: &'a str,
}

/// Body of `POST boards/{board}/mcp-servers/account`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMcpRequest<'a> {
    pub account_id: &'a str,
    pub mcp_id: &'a str,
}
