//! View DTOs for front ends.
//!
//! These types are adapter-neutral: a desktop shell, a web handler and
//! the CLI all render from them.

use std::fmt;

use boardkit_core::{AccountId, ColumnTaskCount, ServerBranding, ToolServerStatus};
use serde::Serialize;

/// Number of tool names shown on a server card before collapsing.
pub const MAX_VISIBLE_TOOLS: usize = 3;

// ============================================================================
// Credentials
// ============================================================================

/// Form input for saving an Anthropic API key.
#[derive(Clone, Default)]
pub struct ApiKeyInput {
    /// Optional display name
    pub name: String,
    /// Secret value
    pub value: String,
}

impl ApiKeyInput {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for ApiKeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyInput")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// State of the API key section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyView {
    /// Name of the stored key, if any
    pub name: Option<String>,
    /// Masked hint shown instead of the key
    pub masked: Option<&'static str>,
    /// Label of the submit button: `Save`, `Replace` or `Saving...`
    pub submit_label: &'static str,
    pub saving: bool,
}

impl ApiKeyView {
    pub const fn has_key(&self) -> bool {
        self.name.is_some()
    }
}

/// One OAuth credential shown under its account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConnection {
    pub credential_id: String,
    pub name: String,
    /// Email (Google) or `@login` (GitHub)
    pub label: Option<String>,
}

/// Connection state of one catalog account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub account_id: AccountId,
    pub name: &'static str,
    pub description: &'static str,
    /// An OAuth flow for this account is being started
    pub connecting: bool,
    pub connections: Vec<AccountConnection>,
}

impl AccountStatus {
    pub fn is_connected(&self) -> bool {
        !self.connections.is_empty()
    }
}

/// Where to send the user to authorize an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthRedirect {
    pub account_id: AccountId,
    pub url: String,
}

// ============================================================================
// Integrations
// ============================================================================

/// Collapsed tool list of a server card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSummary {
    /// Names shown inline
    pub visible: Vec<String>,
    /// Names behind the "+N more" marker
    pub hidden: Vec<String>,
    /// Shown instead of tools when none are cached
    pub fallback: Option<String>,
}

impl ToolSummary {
    /// Summarize tool names, falling back to the server status when
    /// there are none.
    pub fn new(names: Vec<String>, status: &ToolServerStatus) -> Self {
        if names.is_empty() {
            return Self {
                fallback: Some(status.to_string()),
                ..Self::default()
            };
        }
        let mut visible = names;
        let hidden = if visible.len() > MAX_VISIBLE_TOOLS {
            visible.split_off(MAX_VISIBLE_TOOLS)
        } else {
            Vec::new()
        };
        Self {
            visible,
            hidden,
            fallback: None,
        }
    }

    /// The `+N more` label, if any names are hidden.
    pub fn more_label(&self) -> Option<String> {
        (!self.hidden.is_empty()).then(|| format!("+{} more", self.hidden.len()))
    }
}

impl fmt::Display for ToolSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref fallback) = self.fallback {
            return f.write_str(fallback);
        }
        f.write_str(&self.visible.join(", "))?;
        if let Some(more) = self.more_label() {
            write!(f, " {more}")?;
        }
        Ok(())
    }
}

/// An installed server as rendered in the integrations list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCard {
    pub id: String,
    pub name: String,
    pub status: ToolServerStatus,
    pub branding: ServerBranding,
    /// Identity of the account the server runs as
    pub account_label: Option<String>,
    pub tools: ToolSummary,
}

// ============================================================================
// Board
// ============================================================================

/// General-tab overview of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardOverview {
    pub id: String,
    pub name: String,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    pub total_tasks: usize,
    pub columns: Vec<ColumnTaskCount>,
}
