//! Port trait implementation for `BoardApiClient`.
//!
//! Maps internal `ClientError`s onto the core-owned `ApiPortError`.

use async_trait::async_trait;
use boardkit_core::{
    AccountId, ApiPortError, ApiResult, Board, BoardApiPort, Credential, NewCredential,
    NewToolServer, OAuthUrl, Tool, ToolServer,
};

use crate::client::BoardApiClient;
use crate::error::ClientError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ClientError` to core `ApiPortError`.
pub(crate) fn map_error(err: ClientError) -> ApiPortError {
    match err {
        // No envelope: the URL is already logged by the client, keep it out
        // of the user-facing message.
        ClientError::RequestFailed { status, .. } => match status {
            401 | 403 => ApiPortError::Unauthorized {
                message: format!("Access denied ({status})"),
            },
            404 => ApiPortError::NotFound {
                message: format!("Request failed with status {status}"),
            },
            _ => ApiPortError::Rejected {
                status,
                message: format!("Request failed with status {status}"),
            },
        },
        ClientError::Rejected { status, message } => match status {
            401 | 403 => ApiPortError::Unauthorized { message },
            404 => ApiPortError::NotFound { message },
            _ => ApiPortError::Rejected { status, message },
        },
        ClientError::InvalidResponse { message } => ApiPortError::InvalidResponse { message },
        ClientError::InvalidBaseUrl { url } => ApiPortError::Configuration {
            message: format!("Base URL cannot be used for API requests: {url}"),
        },
        ClientError::Network(e) => ApiPortError::Network {
            message: e.to_string(),
        },
        ClientError::InvalidUrl(e) => ApiPortError::Configuration {
            message: e.to_string(),
        },
        ClientError::JsonParse(e) => ApiPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> BoardApiPort for BoardApiClient<B> {
    async fn get_credentials(&self, board_id: &str) -> ApiResult<Vec<Credential>> {
        self.list_credentials(board_id).await.map_err(map_error)
    }

    async fn create_credential(
        &self,
        board_id: &str,
        credential: &NewCredential,
    ) -> ApiResult<Credential> {
        self.post_credential(board_id, credential)
            .await
            .map_err(map_error)
    }

    async fn delete_credential(&self, board_id: &str, credential_id: &str) -> ApiResult<()> {
        self.remove_credential(board_id, credential_id)
            .await
            .map_err(map_error)
    }

    async fn get_oauth_url(&self, board_id: &str, account: AccountId) -> ApiResult<OAuthUrl> {
        self.fetch_oauth_url(board_id, account)
            .await
            .map_err(map_error)
    }

    async fn get_mcp_servers(&self, board_id: &str) -> ApiResult<Vec<ToolServer>> {
        self.list_servers(board_id).await.map_err(map_error)
    }

    async fn get_mcp_server_tools(
        &self,
        board_id: &str,
        server_id: &str,
    ) -> ApiResult<Vec<Tool>> {
        self.list_server_tools(board_id, server_id)
            .await
            .map_err(map_error)
    }

    async fn create_mcp_server(
        &self,
        board_id: &str,
        server: &NewToolServer,
    ) -> ApiResult<ToolServer> {
        self.post_server(board_id, server).await.map_err(map_error)
    }

    async fn create_account_mcp(
        &self,
        board_id: &str,
        account: AccountId,
        offering_id: &str,
    ) -> ApiResult<ToolServer> {
        self.post_account_server(board_id, account, offering_id)
            .await
            .map_err(map_error)
    }

    async fn delete_mcp_server(&self, board_id: &str, server_id: &str) -> ApiResult<()> {
        self.remove_server(board_id, server_id)
            .await
            .map_err(map_error)
    }

    async fn get_board(&self, board_id: &str) -> ApiResult<Board> {
        self.fetch_board(board_id).await.map_err(map_error)
    }

    async fn rename_board(&self, board_id: &str, name: &str) -> ApiResult<()> {
        self.patch_board_name(board_id, name)
            .await
            .map_err(map_error)
    }

    async fn delete_board(&self, board_id: &str) -> ApiResult<()> {
        self.remove_board(board_id).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::client;
    use crate::http::RawResponse;
    use crate::http::testing::FakeBackend;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn test_map_status_codes() {
        let unauthorized = map_error(ClientError::Rejected {
            status: 401,
            message: "Invalid token".to_string(),
        });
        assert_eq!(
            unauthorized,
            ApiPortError::Unauthorized {
                message: "Invalid token".to_string()
            }
        );

        let missing = map_error(ClientError::RequestFailed {
            status: 404,
            url: "http://x/boards/b1".to_string(),
        });
        assert!(matches!(missing, ApiPortError::NotFound { .. }));

        let server_error = map_error(ClientError::RequestFailed {
            status: 500,
            url: "http://x".to_string(),
        });
        assert!(matches!(
            server_error,
            ApiPortError::Rejected { status: 500, .. }
        ));
    }

    #[test]
    fn test_map_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(
            map_error(ClientError::JsonParse(json_err)),
            ApiPortError::InvalidResponse { .. }
        ));
    }

    #[tokio::test]
    async fn test_port_surfaces_envelope_message() {
        let backend = FakeBackend::new().with_response(
            Method::POST,
            "/credentials",
            RawResponse::new(
                400,
                r#"{"success":false,"error":{"message":"Invalid API key format"}}"#,
            ),
        );
        let port: &dyn BoardApiPort = &client(backend);
        let err = port
            .create_credential("b1", &NewCredential::anthropic_api_key("", "bad"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid API key format");
    }

    #[tokio::test]
    async fn test_not_found_without_envelope_has_readable_message() {
        let backend = FakeBackend::new().with_response(
            Method::GET,
            "/credentials",
            RawResponse::new(404, "<html>nope</html>"),
        );
        let port: &dyn BoardApiPort = &client(backend);
        let err = port.get_credentials("b1").await.unwrap_err();
        assert_eq!(
            err,
            ApiPortError::NotFound {
                message: "Request failed with status 404".to_string()
            }
        );
        assert!(!err.message().contains("http"));
    }

    #[tokio::test]
    async fn test_default_replace_goes_through_http() {
        let backend = FakeBackend::new()
            .with_data(Method::DELETE, "/credentials/old", json!(null))
            .with_data(
                Method::POST,
                "/credentials",
                json!({"id": "new", "boardId": "b1", "type": "anthropic_api_key", "name": "Key"}),
            );
        let client = client(backend.clone());
        let outcome = client
            .replace_credential(
                "b1",
                Some("old"),
                &NewCredential::anthropic_api_key("Key", "sk-ant-2"),
            )
            .await
            .unwrap();
        assert_eq!(outcome.credential.id, "new");
        assert!(outcome.stale_credential_id.is_none());

        let methods: Vec<_> = backend.requests().into_iter().map(|r| r.method).collect();
        assert_eq!(methods, [Method::DELETE, Method::POST]);
    }

    #[tokio::test]
    async fn test_replace_reports_stale_id_when_delete_fails() {
        let backend = FakeBackend::new().with_data(
            Method::POST,
            "/credentials",
            json!({"id": "new", "boardId": "b1", "type": "anthropic_api_key", "name": "Key"}),
        );
        let outcome = client(backend)
            .replace_credential(
                "b1",
                Some("gone"),
                &NewCredential::anthropic_api_key("Key", "sk-ant-2"),
            )
            .await
            .unwrap();
        assert_eq!(outcome.stale_credential_id.as_deref(), Some("gone"));
    }
}
