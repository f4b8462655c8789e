//! Static catalog of OAuth accounts and the built-in tool offerings they unlock.
//!
//! The declaration order of [`ACCOUNT_CATALOG`] and of each entry's
//! offerings is the order every derived list is presented in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::CredentialType;

/// An OAuth-backed identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountId {
    Github,
    Google,
}

impl AccountId {
    /// Every account, in the order OAuth return markers are checked.
    pub const ALL: [Self; 2] = [Self::Github, Self::Google];

    /// Identifier used in URLs, query markers and API bodies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Google => "google",
        }
    }

    /// Provider name shown to users.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Google => "Google",
        }
    }

    /// Call to action shown while the account is not connected.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Github => "Connect to add repositories, issues, pull requests",
            Self::Google => "Connect to add Gmail, Docs, Sheets",
        }
    }

    /// OAuth credential type proving the account is connected.
    pub const fn credential_type(self) -> CredentialType {
        match self {
            Self::Github => CredentialType::GithubOauth,
            Self::Google => CredentialType::GoogleOauth,
        }
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "google" => Ok(Self::Google),
            other => Err(format!("Unknown account: {other}")),
        }
    }
}

/// A built-in tool that becomes available once its account is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Offering {
    /// Stable id sent to the API (e.g. `google-docs`)
    pub id: &'static str,
    /// Display name, also the name the created server receives
    pub name: &'static str,
    pub description: &'static str,
}

/// Catalog row: one account and its offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCatalogEntry {
    pub account: AccountId,
    pub offerings: &'static [Offering],
}

impl AccountCatalogEntry {
    /// OAuth credential type required by this entry.
    pub const fn credential_type(&self) -> CredentialType {
        self.account.credential_type()
    }

    /// Look up an offering by id.
    pub fn offering(&self, offering_id: &str) -> Option<&'static Offering> {
        self.offerings.iter().find(|offering| offering.id == offering_id)
    }
}

const GOOGLE_OFFERINGS: &[Offering] = &[
    Offering {
        id: "gmail",
        name: "Gmail",
        description: "Read, send, and search emails",
    },
    Offering {
        id: "google-docs",
        name: "Google Docs",
        description: "Create and edit documents",
    },
    Offering {
        id: "google-sheets",
        name: "Google Sheets",
        description: "Create and edit spreadsheets",
    },
];

const GITHUB_OFFERINGS: &[Offering] = &[Offering {
    id: "github",
    name: "GitHub",
    description: "Repositories, issues, pull requests",
}];

/// The built-in account catalog.
pub static ACCOUNT_CATALOG: &[AccountCatalogEntry] = &[
    AccountCatalogEntry {
        account: AccountId::Google,
        offerings: GOOGLE_OFFERINGS,
    },
    AccountCatalogEntry {
        account: AccountId::Github,
        offerings: GITHUB_OFFERINGS,
    },
];

/// Catalog entry for an account.
pub fn catalog_entry(account: AccountId) -> Option<&'static AccountCatalogEntry> {
    ACCOUNT_CATALOG.iter().find(|entry| entry.account == account)
}

/// Offering `offering_id` of `account`, if the catalog has it.
pub fn find_offering(account: AccountId, offering_id: &str) -> Option<&'static Offering> {
    catalog_entry(account).and_then(|entry| entry.offering(offering_id))
}

/// Visual branding of an installed server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerBranding {
    Github,
    Google,
    Generic,
}

impl ServerBranding {
    /// Branding for a server, derived from its display name.
    ///
    /// A server branded after an account is one whose name equals one of
    /// that account's offering names.
    pub fn for_server_name(name: &str) -> Self {
        let owner = ACCOUNT_CATALOG.iter().find(|entry| {
            entry
                .offerings
                .iter()
                .any(|offering| offering.name == name)
        });
        match owner.map(|entry| entry.account) {
            Some(AccountId::Github) => Self::Github,
            Some(AccountId::Google) => Self::Google,
            None => Self::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_declaration_order() {
        let accounts: Vec<_> = ACCOUNT_CATALOG.iter().map(|e| e.account).collect();
        assert_eq!(accounts, [AccountId::Google, AccountId::Github]);

        let google: Vec<_> = GOOGLE_OFFERINGS.iter().map(|o| o.id).collect();
        assert_eq!(google, ["gmail", "google-docs", "google-sheets"]);
    }

    #[test]
    fn test_account_round_trip() {
        for account in AccountId::ALL {
            assert_eq!(account.as_str().parse::<AccountId>(), Ok(account));
        }
        assert!("slack".parse::<AccountId>().is_err());
        assert_eq!(
            serde_json::to_value(AccountId::Github).unwrap(),
            serde_json::json!("github")
        );
    }

    #[test]
    fn test_account_credential_types() {
        assert_eq!(AccountId::Github.credential_type(), CredentialType::GithubOauth);
        assert_eq!(AccountId::Google.credential_type(), CredentialType::GoogleOauth);
    }

    #[test]
    fn test_find_offering() {
        let docs = find_offering(AccountId::Google, "google-docs").unwrap();
        assert_eq!(docs.name, "Google Docs");
        assert!(find_offering(AccountId::Github, "gmail").is_none());
        assert!(find_offering(AccountId::Google, "unknown").is_none());
    }

    #[test]
    fn test_server_branding() {
        assert_eq!(ServerBranding::for_server_name("GitHub"), ServerBranding::Github);
        assert_eq!(ServerBranding::for_server_name("Gmail"), ServerBranding::Google);
        assert_eq!(
            ServerBranding::for_server_name("Google Sheets"),
            ServerBranding::Google
        );
        assert_eq!(ServerBranding::for_server_name("github"), ServerBranding::Generic);
        assert_eq!(ServerBranding::for_server_name("Linear"), ServerBranding::Generic);
    }
}
