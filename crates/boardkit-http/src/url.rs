//! URL construction for board API endpoints.
//!
//! Every id is appended as a single path segment, so characters such as
//! `/`, `?` or spaces are percent-encoded rather than altering the route.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// Endpoint builder rooted at the API base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Parse and validate a base URL.
    pub fn parse(base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }
        Ok(Self { base })
    }

    fn build(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                url: self.base.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `boards/{board}`
    pub fn board(&self, board_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id])
    }

    /// `boards/{board}/credentials`
    pub fn credentials(&self, board_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "credentials"])
    }

    /// `boards/{board}/credentials/{id}`
    pub fn credential(&self, board_id: &str, credential_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "credentials", credential_id])
    }

    /// `boards/{board}/oauth/{account}/url`
    pub fn oauth_url(&self, board_id: &str, account: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "oauth", account, "url"])
    }

    /// `boards/{board}/mcp-servers`
    pub fn mcp_servers(&self, board_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "mcp-servers"])
    }

    /// `boards/{board}/mcp-servers/account`
    pub fn account_mcp(&self, board_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "mcp-servers", "account"])
    }

    /// `boards/{board}/mcp-servers/{id}`
    pub fn mcp_server(&self, board_id: &str, server_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "mcp-servers", server_id])
    }

    /// `boards/{board}/mcp-servers/{id}/tools`
    pub fn mcp_server_tools(&self, board_id: &str, server_id: &str) -> ClientResult<Url> {
        self.build(&["boards", board_id, "mcp-servers", server_id, "tools"])
    }
}
