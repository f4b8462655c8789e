//! Store change notifications.
//!
//! Events are serialized with a `type` tag so front ends can switch on it:
//!
//! ```json
//! { "type": "server_added", "serverId": "s1", "name": "Gmail" }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::CredentialType;

/// A change applied to a board's settings store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    // ========== Credential Events ==========
    /// The credential list was (re)loaded.
    CredentialsLoaded { count: usize },

    /// A credential was created or replaced.
    CredentialUpserted {
        credential_id: String,
        credential_type: CredentialType,
    },

    /// A credential was deleted.
    CredentialRemoved { credential_id: String },

    // ========== Tool Server Events ==========
    /// The server list was (re)loaded.
    ServersLoaded { count: usize },

    /// A server was installed.
    ServerAdded { server_id: String, name: String },

    /// A server was deleted along with its cached tools.
    ServerRemoved { server_id: String },

    /// A server's tool list was cached.
    ToolsLoaded { server_id: String, count: usize },

    // ========== Panel Events ==========
    /// The board overview was (re)loaded.
    BoardLoaded,

    /// The error banner changed.
    ErrorChanged { message: Option<String> },

    /// The store was cleared for a new session.
    Reset,
}

impl StoreEvent {
    /// Event name for wire protocols.
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::CredentialsLoaded { .. } => "credentials:loaded",
            Self::CredentialUpserted { .. } => "credentials:upserted",
            Self::CredentialRemoved { .. } => "credentials:removed",
            Self::ServersLoaded { .. } => "servers:loaded",
            Self::ServerAdded { .. } => "servers:added",
            Self::ServerRemoved { .. } => "servers:removed",
            Self::ToolsLoaded { .. } => "tools:loaded",
            Self::BoardLoaded => "board:loaded",
            Self::ErrorChanged { .. } => "panel:error",
            Self::Reset => "panel:reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = StoreEvent::ServerAdded {
            server_id: "s1".to_string(),
            name: "Gmail".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"server_added\""));
        assert!(json.contains("\"serverId\":\"s1\""));
    }

    #[test]
    fn test_credential_type_serializes_as_wire_string() {
        let event = StoreEvent::CredentialUpserted {
            credential_id: "c1".to_string(),
            credential_type: CredentialType::AnthropicApiKey,
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["credentialType"], "anthropic_api_key");
        assert_eq!(event.event_name(), "credentials:upserted");
    }

    #[test]
    fn test_unit_variant_round_trip() {
        let json = serde_json::to_string(&StoreEvent::Reset).unwrap();
        assert_eq!(json, "{\"type\":\"reset\"}");
        let back: StoreEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StoreEvent::Reset);
    }
}
