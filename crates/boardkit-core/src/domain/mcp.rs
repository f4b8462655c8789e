//! Tool server (MCP server) domain types.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connection status reported by the backend for a tool server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToolServerStatus {
    /// Server is reachable and serving tools
    Connected,
    /// Server is registered but not connected
    #[default]
    Disconnected,
    /// Server failed to connect
    Error,
    /// A status string this client does not know about
    Other(String),
}

impl ToolServerStatus {
    /// Wire representation of this status.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
            Self::Error => "error",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ToolServerStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "connected" => Self::Connected,
            "disconnected" => Self::Disconnected,
            "error" => Self::Error,
            _ => Self::Other(value),
        }
    }
}

impl From<ToolServerStatus> for String {
    fn from(value: ToolServerStatus) -> Self {
        match value {
            ToolServerStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ToolServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tool provider attached to a board.
///
/// Servers are either registered directly (custom) or instantiated from a
/// connected account, in which case `credential_id` points at the OAuth
/// credential the server runs as. The reference is display-only; the
/// server does not own the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolServer {
    pub id: String,
    pub board_id: String,
    pub name: String,
    #[serde(default)]
    pub status: ToolServerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

/// A tool exposed by a tool server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
}

/// Request body for registering a custom tool server.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewToolServer {
    /// Display name
    pub name: String,
    /// Streamable HTTP endpoint of the server (e.g. `https://mcp.example.com/mcp`)
    pub url: String,
    /// Extra request headers, typically an authorization header
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl NewToolServer {
    /// Create a registration request without headers.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Add a request header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Validate the registration request.
    ///
    /// Returns an error message suitable for showing next to the form.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Server name cannot be empty".to_string());
        }

        let url = self.url.trim();
        let lower = url.to_ascii_lowercase();
        let rest = lower
            .strip_prefix("https://")
            .or_else(|| lower.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => {}
            _ => {
                return Err(format!(
                    "Server URL must start with http:// or https://: {url}"
                ));
            }
        }

        if self.headers.keys().any(|key| key.trim().is_empty()) {
            return Err("Header names cannot be empty".to_string());
        }

        Ok(())
    }
}

// Header values frequently carry tokens.
impl fmt::Debug for NewToolServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewToolServer")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}
