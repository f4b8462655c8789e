//! Core domain types and port definitions for boardkit.
//!
//! This crate owns everything the board settings backend agrees on
//! regardless of adapter:
//!
//! - `domain` - credentials, tool servers, tools and boards as the REST API
//!   describes them
//! - `catalog` - the static table of OAuth accounts and the built-in tool
//!   offerings each account unlocks
//! - `resolver` - the pure reconciliation of credentials and installed
//!   servers into "connect" and "add" offers
//! - `ports` - the `BoardApiPort` trait implemented by `boardkit-http`
//! - `events` - store change events broadcast to front ends
//!
//! No transport, no runtime, no UI lives here.

#![deny(unused_crate_dependencies)]

pub mod catalog;
pub mod domain;
pub mod events;
pub mod ports;
pub mod resolver;

// Re-export commonly used types for convenience
pub use catalog::{
    ACCOUNT_CATALOG, AccountCatalogEntry, AccountId, Offering, ServerBranding, catalog_entry,
    find_offering,
};
pub use domain::{
    API_KEY_MASK, Board, Column, ColumnTaskCount, Credential, CredentialType,
    DEFAULT_API_KEY_NAME, NewCredential, NewToolServer, OAuthUrl, Task, Tool, ToolServer,
    ToolServerStatus,
};
pub use events::StoreEvent;
pub use ports::{ApiPortError, ApiResult, BoardApiPort, ReplaceOutcome};
pub use resolver::{
    AccountOffer, AvailableIntegrations, ToolOffer, is_connected, resolve_available,
    resolve_with_catalog, server_matches_offering,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
