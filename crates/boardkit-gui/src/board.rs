//! Board operations for the general and danger tabs.

use boardkit_core::{Board, BoardApiPort};
use tracing::{info, warn};

use crate::deps::PanelDeps;
use crate::error::GuiError;
use crate::session::Session;
use crate::store::{BoardStore, StoreSnapshot};
use crate::types::BoardOverview;

/// Board operations handler.
pub struct BoardOps<'a> {
    api: &'a dyn BoardApiPort,
    store: &'a BoardStore,
    session: Session,
}

impl<'a> BoardOps<'a> {
    pub fn new(deps: &'a PanelDeps, store: &'a BoardStore, session: Session) -> Self {
        Self {
            api: deps.api.as_ref(),
            store,
            session,
        }
    }

    pub async fn load(&self) -> Result<Board, GuiError> {
        let generation = self.session.generation();
        match self
            .session
            .run(self.api.get_board(self.store.board_id()))
            .await
        {
            Ok(board) => {
                self.store.set_board(generation, board.clone()).await;
                Ok(board)
            }
            Err(e) => {
                if e != GuiError::Cancelled {
                    warn!(board_id = %self.store.board_id(), error = %e, "Failed to load board");
                    self.store
                        .set_error(generation, Some(e.banner_or("Failed to load board")))
                        .await;
                }
                Err(e)
            }
        }
    }

    /// Rename the board to the trimmed `name`.
    ///
    /// Returns `false` without calling the backend when the trimmed name is
    /// empty or equal to the current name.
    pub async fn rename(&self, name: &str) -> Result<bool, GuiError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }
        let current = self.store.snapshot().await.board.map(|b| b.name);
        if current.as_deref() == Some(name) {
            return Ok(false);
        }

        self.session
            .run(self.api.rename_board(self.store.board_id(), name))
            .await?;
        info!(board_id = %self.store.board_id(), name, "Board renamed");
        self.store
            .rename_board(self.session.generation(), name)
            .await;
        Ok(true)
    }

    /// Delete the board once `typed` exactly matches its name.
    pub async fn delete(&self, typed: &str) -> Result<(), GuiError> {
        let board = match self.store.snapshot().await.board {
            Some(board) => board,
            None => self.load().await?,
        };
        if !board.deletion_confirmed(typed) {
            return Err(GuiError::ValidationFailed(format!(
                "Type \"{}\" to confirm deletion",
                board.name
            )));
        }

        self.session
            .run(self.api.delete_board(&board.id))
            .await?;
        info!(board_id = %board.id, "Board deleted");
        Ok(())
    }
}

/// General-tab overview of the cached board.
pub fn overview(snapshot: &StoreSnapshot) -> Option<BoardOverview> {
    snapshot.board.as_ref().map(|board| BoardOverview {
        id: board.id.clone(),
        name: board.name.clone(),
        created_at: board.created_at.to_rfc3339(),
        total_tasks: board.total_tasks(),
        columns: board.task_counts_by_column(),
    })
}
