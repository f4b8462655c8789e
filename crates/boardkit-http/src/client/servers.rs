//! Tool server (MCP) endpoints.

use boardkit_core::{AccountId, NewToolServer, Tool, ToolServer};
use reqwest::Method;

use super::BoardApiClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::AccountMcpRequest;

impl<B: HttpBackend> BoardApiClient<B> {
    pub(crate) async fn list_servers(&self, board_id: &str) -> ClientResult<Vec<ToolServer>> {
        let url = self.endpoints.mcp_servers(board_id)?;
        self.call(Method::GET, url).await
    }

    pub(crate) async fn list_server_tools(
        &self,
        board_id: &str,
        server_id: &str,
    ) -> ClientResult<Vec<Tool>> {
        let url = self.endpoints.mcp_server_tools(board_id, server_id)?;
        self.call(Method::GET, url).await
    }

    pub(crate) async fn post_server(
        &self,
        board_id: &str,
        server: &NewToolServer,
    ) -> ClientResult<ToolServer> {
        let url = self.endpoints.mcp_servers(board_id)?;
        self.call_with_body(Method::POST, url, server).await
    }

    pub(crate) async fn post_account_server(
        &self,
        board_id: &str,
        account: AccountId,
        offering_id: &str,
    ) -> ClientResult<ToolServer> {
        let url = self.endpoints.account_mcp(board_id)?;
        let body = AccountMcpRequest {
            account_id: account.as_str(),
            mcp_id: offering_id,
        };
        self.call_with_body(Method::POST, url, &body).await
    }

    pub(crate) async fn remove_server(&self, board_id: &str, server_id: &str) -> ClientResult<()> {
        let url = self.endpoints.mcp_server(board_id, server_id)?;
        self.call(Method::DELETE, url).await
    }
}
