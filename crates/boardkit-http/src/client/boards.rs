//! Board endpoints.

use boardkit_core::Board;
use reqwest::Method;

use super::BoardApiClient;
use crate::error::ClientResult;
use crate::http::HttpBackend;
use crate::models::RenameBoardRequest;

impl<B: HttpBackend> BoardApiClient<B> {
    pub(crate) async fn fetch_board(&self, board_id: &str) -> ClientResult<Board> {
        let url = self.endpoints.board(board_id)?;
        self.call(Method::GET, url).await
    }

    pub(crate) async fn patch_board_name(&self, board_id: &str, name: &str) -> ClientResult<()> {
        let url = self.endpoints.board(board_id)?;
        self.call_with_body(Method::PATCH, url, &RenameBoardRequest { name })
            .await
    }

    pub(crate) async fn remove_board(&self, board_id: &str) -> ClientResult<()> {
        let url = self.endpoints.board(board_id)?;
        self.call(Method::DELETE, url).await
    }
}
