//! Domain types shared by every boardkit adapter.
//!
//! Field names follow the REST API wire format (camelCase JSON).

mod board;
mod credential;
mod mcp;

pub use board::{Board, Column, ColumnTaskCount, Task};
pub use credential::{
    API_KEY_MASK, Credential, CredentialType, DEFAULT_API_KEY_NAME, NewCredential, OAuthUrl,
};
pub use mcp::{NewToolServer, Tool, ToolServer, ToolServerStatus};
