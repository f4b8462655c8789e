//! Board API port trait.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use super::error::ApiResult;
use crate::catalog::AccountId;
use crate::domain::{Board, Credential, NewCredential, NewToolServer, OAuthUrl, Tool, ToolServer};

/// Outcome of [`BoardApiPort::replace_credential`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    /// The newly created credential
    pub credential: Credential,
    /// Id of the previous credential when deleting it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_credential_id: Option<String>,
}

/// Port trait for the board REST backend.
///
/// Every method is scoped to a board id. Implementations map transport
/// failures to [`ApiPortError`](super::ApiPortError) and never retry.
#[async_trait]
pub trait BoardApiPort: Send + Sync {
    /// List the board's credentials.
    async fn get_credentials(&self, board_id: &str) -> ApiResult<Vec<Credential>>;

    /// Store a new credential.
    async fn create_credential(
        &self,
        board_id: &str,
        credential: &NewCredential,
    ) -> ApiResult<Credential>;

    /// Delete a credential by id.
    async fn delete_credential(&self, board_id: &str, credential_id: &str) -> ApiResult<()>;

    /// Replace a credential: delete `existing_id` (if any), then create.
    ///
    /// The default implementation is strictly ordered. The create runs even
    /// when the delete fails; the failed id is then reported as
    /// `stale_credential_id`. Adapters with an atomic upsert should
    /// override this.
    async fn replace_credential(
        &self,
        board_id: &str,
        existing_id: Option<&str>,
        credential: &NewCredential,
    ) -> ApiResult<ReplaceOutcome> {
        let mut stale_credential_id = None;
        if let Some(existing_id) = existing_id {
            if let Err(e) = self.delete_credential(board_id, existing_id).await {
                warn!(
                    board_id,
                    credential_id = existing_id,
                    error = %e,
                    "Failed to delete previous credential before replacing it"
                );
                stale_credential_id = Some(existing_id.to_string());
            }
        }

        let credential = self.create_credential(board_id, credential).await?;
        Ok(ReplaceOutcome {
            credential,
            stale_credential_id,
        })
    }

    /// Start an OAuth flow for `account`, returning the authorization URL.
    async fn get_oauth_url(&self, board_id: &str, account: AccountId) -> ApiResult<OAuthUrl>;

    /// List the board's tool servers.
    async fn get_mcp_servers(&self, board_id: &str) -> ApiResult<Vec<ToolServer>>;

    /// List the tools a server exposes.
    async fn get_mcp_server_tools(&self, board_id: &str, server_id: &str)
    -> ApiResult<Vec<Tool>>;

    /// Register a custom tool server.
    async fn create_mcp_server(
        &self,
        board_id: &str,
        server: &NewToolServer,
    ) -> ApiResult<ToolServer>;

    /// Instantiate a built-in offering bound to a connected account.
    async fn create_account_mcp(
        &self,
        board_id: &str,
        account: AccountId,
        offering_id: &str,
    ) -> ApiResult<ToolServer>;

    /// Delete a tool server.
    async fn delete_mcp_server(&self, board_id: &str, server_id: &str) -> ApiResult<()>;

    /// Fetch the board with its columns and tasks.
    async fn get_board(&self, board_id: &str) -> ApiResult<Board>;

    /// Rename the board.
    async fn rename_board(&self, board_id: &str, name: &str) -> ApiResult<()>;

    /// Delete the board and everything on it.
    async fn delete_board(&self, board_id: &str) -> ApiResult<()>;
}
