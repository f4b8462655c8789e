//! Credential and OAuth endpoints.

use boardkit_core::{AccountId, Credential, NewCredential, OAuthUrl};
use reqwest::Method;

use super::BoardApiClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;

impl<B: HttpBackend> BoardApiClient<B> {
    pub(crate) async fn list_credentials(&self, board_id: &str) -> ClientResult<Vec<Credential>> {
        let url = self.endpoints.credentials(board_id)?;
        self.call(Method::GET, url).await
    }

    pub(crate) async fn post_credential(
        &self,
        board_id: &str,
        credential: &NewCredential,
    ) -> ClientResult<Credential> {
        let url = self.endpoints.credentials(board_id)?;
        self.call_with_body(Method::POST, url, credential).await
    }

    pub(crate) async fn remove_credential(
        &self,
        board_id: &str,
        credential_id: &str,
    ) -> ClientResult<()> {
        let url = self.endpoints.credential(board_id, credential_id)?;
        self.call(Method::DELETE, url).await
    }

    pub(crate) async fn fetch_oauth_url(
        &self,
        board_id: &str,
        account: AccountId,
    ) -> ClientResult<OAuthUrl> {
        let url = self.endpoints.oauth_url(board_id, account.as_str())?;
        self.call(Method::GET, url).await
    }
}
