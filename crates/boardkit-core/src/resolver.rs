//! Integration catalog resolution.
//!
//! Decides which OAuth accounts still need connecting and which built-in
//! tool offerings can be added, given a board's credentials and installed
//! tool servers. Everything here is a pure function of its inputs; the
//! results are recomputed on every read and never cached.

use serde::Serialize;

use crate::catalog::{ACCOUNT_CATALOG, AccountCatalogEntry, AccountId, Offering};
use crate::domain::{Credential, ToolServer};

/// An account that has no OAuth credential on the board yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOffer {
    pub account_id: AccountId,
    pub name: &'static str,
    pub description: &'static str,
}

/// A built-in offering whose account is connected but which has no
/// matching server installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOffer {
    pub account_id: AccountId,
    pub offering_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Result of [`resolve_available`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableIntegrations {
    pub unconnected_accounts: Vec<AccountOffer>,
    pub available_account_tools: Vec<ToolOffer>,
}

impl AvailableIntegrations {
    /// Whether there is nothing left to connect or add.
    pub fn is_empty(&self) -> bool {
        self.unconnected_accounts.is_empty() && self.available_account_tools.is_empty()
    }
}

/// Whether `server` counts as an installation of `offering`.
///
/// Matches on the exact offering name, or on the lowercased server name
/// equalling the offering id (so a custom server called "GMAIL" hides the
/// Gmail offering).
pub fn server_matches_offering(server: &ToolServer, offering: &Offering) -> bool {
    server.name == offering.name || server.name.to_lowercase() == offering.id
}

/// Whether the board holds a credential of the entry's OAuth type.
pub fn is_connected(entry: &AccountCatalogEntry, credentials: &[Credential]) -> bool {
    let wanted = entry.credential_type();
    credentials
        .iter()
        .any(|credential| credential.credential_type == wanted)
}

/// Resolve available integrations against the built-in catalog.
pub fn resolve_available(credentials: &[Credential], servers: &[ToolServer]) -> AvailableIntegrations {
    resolve_with_catalog(ACCOUNT_CATALOG, credentials, servers)
}

/// Resolve available integrations against an arbitrary catalog.
///
/// Entries and offerings are visited in declaration order, so output
/// order only depends on the catalog.
pub fn resolve_with_catalog(
    catalog: &[AccountCatalogEntry],
    credentials: &[Credential],
    servers: &[ToolServer],
) -> AvailableIntegrations {
    let mut result = AvailableIntegrations::default();

    for entry in catalog {
        if !is_connected(entry, credentials) {
            result.unconnected_accounts.push(AccountOffer {
                account_id: entry.account,
                name: entry.account.display_name(),
                description: entry.account.description(),
            });
            continue;
        }

        let addable = entry.offerings.iter().filter(|offering| {
            !servers
                .iter()
                .any(|server| server_matches_offering(server, offering))
        });
        result
            .available_account_tools
            .extend(addable.map(|offering| ToolOffer {
                account_id: entry.account,
                offering_id: offering.id,
                name: offering.name,
                description: offering.description,
            }));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CredentialType, ToolServerStatus};

    fn credential(credential_type: CredentialType) -> Credential {
        Credential {
            id: format!("cred-{credential_type}"),
            board_id: "b1".to_string(),
            credential_type,
            name: "cred".to_string(),
            metadata: serde_json::Map::new(),
            created_at: None,
        }
    }

    fn server(name: &str) -> ToolServer {
        ToolServer {
            id: format!("srv-{name}"),
            board_id: "b1".to_string(),
            name: name.to_string(),
            status: ToolServerStatus::Connected,
            credential_id: None,
        }
    }

    #[test]
    fn test_empty_inputs_leave_everything_unconnected() {
        let result = resolve_available(&[], &[]);
        let accounts: Vec<_> = result
            .unconnected_accounts
            .iter()
            .map(|a| a.account_id)
            .collect();
        assert_eq!(accounts, [AccountId::Google, AccountId::Github]);
        assert!(result.available_account_tools.is_empty());
    }

    #[test]
    fn test_connected_account_offers_its_tools() {
        let result = resolve_available(&[credential(CredentialType::GithubOauth)], &[]);
        assert_eq!(result.unconnected_accounts.len(), 1);
        assert_eq!(result.unconnected_accounts[0].account_id, AccountId::Google);
        assert_eq!(result.available_account_tools.len(), 1);
        assert_eq!(result.available_account_tools[0].offering_id, "github");
    }

    #[test]
    fn test_match_by_lowercased_id() {
        let creds = [credential(CredentialType::GoogleOauth)];
        let result = resolve_available(&creds, &[server("GMAIL")]);
        let ids: Vec<_> = result
            .available_account_tools
            .iter()
            .map(|t| t.offering_id)
            .collect();
        assert_eq!(ids, ["google-docs", "google-sheets"]);
    }

    #[test]
    fn test_api_key_does_not_connect_accounts() {
        let result = resolve_available(&[credential(CredentialType::AnthropicApiKey)], &[]);
        assert_eq!(result.unconnected_accounts.len(), 2);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_everything_installed_is_empty() {
        let creds = [
            credential(CredentialType::GoogleOauth),
            credential(CredentialType::GithubOauth),
        ];
        let servers = [
            server("Gmail"),
            server("Google Docs"),
            server("Google Sheets"),
            server("GitHub"),
        ];
        assert!(resolve_available(&creds, &servers).is_empty());
    }

    #[test]
    fn test_custom_catalog() {
        const OFFERINGS: &[Offering] = &[Offering {
            id: "issues",
            name: "Issues",
            description: "Issue tracker",
        }];
        let catalog = [AccountCatalogEntry {
            account: AccountId::Github,
            offerings: OFFERINGS,
        }];
        let result =
            resolve_with_catalog(&catalog, &[credential(CredentialType::GithubOauth)], &[]);
        assert!(result.unconnected_accounts.is_empty());
        assert_eq!(result.available_account_tools[0].name, "Issues");
    }
}
