//! Board credential domain types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name given to an Anthropic API key when the user leaves the name blank.
pub const DEFAULT_API_KEY_NAME: &str = "Anthropic API Key";

/// Display hint shown in place of a stored API key value.
pub const API_KEY_MASK: &str = "sk-ant-...****";

/// Kind of secret or grant a credential holds.
///
/// The wire value is a plain string. Unknown values are preserved in
/// `Other` so newer backends do not break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CredentialType {
    /// Anthropic API key; at most one is surfaced per board.
    AnthropicApiKey,
    /// GitHub OAuth grant.
    GithubOauth,
    /// Google OAuth grant.
    GoogleOauth,
    /// A type this client does not know about.
    Other(String),
}

impl CredentialType {
    /// Wire representation of this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AnthropicApiKey => "anthropic_api_key",
            Self::GithubOauth => "github_oauth",
            Self::GoogleOauth => "google_oauth",
            Self::Other(value) => value,
        }
    }

    /// Whether this credential was issued through an OAuth flow.
    pub const fn is_oauth(&self) -> bool {
        matches!(self, Self::GithubOauth | Self::GoogleOauth)
    }
}

impl From<String> for CredentialType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "anthropic_api_key" => Self::AnthropicApiKey,
            "github_oauth" => Self::GithubOauth,
            "google_oauth" => Self::GoogleOauth,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for CredentialType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<CredentialType> for String {
    fn from(value: CredentialType) -> Self {
        match value {
            CredentialType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored secret or OAuth grant scoped to a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub board_id: String,
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub name: String,
    /// Provider-specific details (e.g. `email` for Google, `login` for GitHub).
    #[serde(default)]
    pub metadata: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Read a non-empty string value from the metadata map.
    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Human-readable identity of the connected account.
    ///
    /// Google grants show the account email, GitHub grants show `@login`.
    /// Other credential types have no account label.
    pub fn account_label(&self) -> Option<String> {
        match self.credential_type {
            CredentialType::GoogleOauth => self.metadata_str("email").map(str::to_string),
            CredentialType::GithubOauth => self.metadata_str("login").map(|login| format!("@{login}")),
            _ => None,
        }
    }
}

/// Request body for creating a credential.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCredential {
    #[serde(rename = "type")]
    pub credential_type: CredentialType,
    pub name: String,
    pub value: String,
}

impl NewCredential {
    /// Build an Anthropic API key credential.
    ///
    /// Both inputs are trimmed; a blank name falls back to
    /// [`DEFAULT_API_KEY_NAME`].
    pub fn anthropic_api_key(name: &str, value: &str) -> Self {
        let name = name.trim();
        Self {
            credential_type: CredentialType::AnthropicApiKey,
            name: if name.is_empty() {
                DEFAULT_API_KEY_NAME.to_string()
            } else {
                name.to_string()
            },
            value: value.trim().to_string(),
        }
    }
}

// Secret values never reach logs.
impl fmt::Debug for NewCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewCredential")
            .field("credential_type", &self.credential_type)
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Authorization URL returned by the OAuth start endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthUrl {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credential(credential_type: CredentialType, metadata: Value) -> Credential {
        Credential {
            id: "c1".to_string(),
            board_id: "b1".to_string(),
            credential_type,
            name: "cred".to_string(),
            metadata: metadata.as_object().cloned().unwrap_or_default(),
            created_at: None,
        }
    }

    #[test]
    fn test_credential_type_wire_values() {
        assert_eq!(
            CredentialType::from("anthropic_api_key"),
            CredentialType::AnthropicApiKey
        );
        assert_eq!(CredentialType::from("github_oauth"), CredentialType::GithubOauth);
        assert_eq!(CredentialType::from("google_oauth"), CredentialType::GoogleOauth);
        assert_eq!(
            CredentialType::from("slack_oauth"),
            CredentialType::Other("slack_oauth".to_string())
        );
    }

    #[test]
    fn test_unknown_credential_type_round_trips() {
        let raw = json!({
            "id": "c9",
            "boardId": "b1",
            "type": "linear_oauth",
            "name": "Linear",
            "metadata": {}
        });
        let parsed: Credential = serde_json::from_value(raw).unwrap();
        assert_eq!(
            parsed.credential_type,
            CredentialType::Other("linear_oauth".to_string())
        );
        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["type"], "linear_oauth");
        assert_eq!(back["boardId"], "b1");
    }

    #[test]
    fn test_missing_metadata_defaults_to_empty() {
        let raw = json!({"id": "c1", "boardId": "b1", "type": "github_oauth", "name": "GitHub"});
        let parsed: Credential = serde_json::from_value(raw).unwrap();
        assert!(parsed.metadata.is_empty());
        assert_eq!(parsed.account_label(), None);
    }

    #[test]
    fn test_account_labels() {
        let google = credential(CredentialType::GoogleOauth, json!({"email": "me@example.com"}));
        assert_eq!(google.account_label().as_deref(), Some("me@example.com"));

        let github = credential(CredentialType::GithubOauth, json!({"login": "octocat"}));
        assert_eq!(github.account_label().as_deref(), Some("@octocat"));

        let empty_email = credential(CredentialType::GoogleOauth, json!({"email": ""}));
        assert_eq!(empty_email.account_label(), None);

        let key = credential(CredentialType::AnthropicApiKey, json!({"login": "ignored"}));
        assert_eq!(key.account_label(), None);
    }

    #[test]
    fn test_new_api_key_trims_and_defaults_name() {
        let cred = NewCredential::anthropic_api_key("   ", "  sk-ant-123  ");
        assert_eq!(cred.name, DEFAULT_API_KEY_NAME);
        assert_eq!(cred.value, "sk-ant-123");

        let named = NewCredential::anthropic_api_key(" Work key ", "sk-ant-456");
        assert_eq!(named.name, "Work key");
    }

    #[test]
    fn test_new_credential_debug_redacts_value() {
        let cred = NewCredential::anthropic_api_key("k", "sk-ant-secret");
        let debug = format!("{cred:?}");
        assert!(!debug.contains("sk-ant-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_new_credential_wire_format() {
        let cred = NewCredential::anthropic_api_key("", "sk-ant-1");
        let value = serde_json::to_value(&cred).unwrap();
        assert_eq!(
            value,
            json!({"type": "anthropic_api_key", "name": "Anthropic API Key", "value": "sk-ant-1"})
        );
    }
}
