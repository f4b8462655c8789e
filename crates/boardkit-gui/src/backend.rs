//! Main settings panel facade.
//!
//! `SettingsPanel` is the single entry point front ends use. It owns the
//! board store, the navigation state and the current session, and
//! delegates the actual work to the operation handlers.

use std::sync::Arc;

use boardkit_core::{
    AccountId, AvailableIntegrations, Credential, NewToolServer, ReplaceOutcome, StoreEvent,
    ToolServer,
};
use tokio::sync::{Mutex, broadcast};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::board::{self, BoardOps};
use crate::credentials::{self, CredentialOps};
use crate::deps::PanelDeps;
use crate::error::GuiError;
use crate::integrations::{self, IntegrationOps};
use crate::oauth::RedirectQuery;
use crate::panel::{PanelState, SettingsTab};
use crate::session::Session;
use crate::store::{BoardStore, StoreSnapshot};
use crate::types::{
    AccountStatus, ApiKeyInput, ApiKeyView, BoardOverview, OAuthRedirect, ServerCard,
};

/// Settings panel of one board.
pub struct SettingsPanel {
    deps: PanelDeps,
    store: Arc<BoardStore>,
    session: Mutex<Option<Session>>,
    state: Mutex<PanelState>,
}

impl SettingsPanel {
    /// Create a closed panel for `board_id`.
    pub fn new(deps: PanelDeps, board_id: impl Into<String>) -> Self {
        Self {
            deps,
            store: Arc::new(BoardStore::new(board_id)),
            session: Mutex::new(None),
            state: Mutex::new(PanelState::default()),
        }
    }

    pub fn board_id(&self) -> &str {
        self.store.board_id()
    }

    /// Shared handle to the underlying store.
    pub fn store(&self) -> Arc<BoardStore> {
        Arc::clone(&self.store)
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot().await
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    /// Current navigation and form state.
    pub async fn view(&self) -> PanelState {
        self.state.lock().await.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.session
            .lock()
            .await
            .as_ref()
            .is_some_and(|session| !session.is_cancelled())
    }

    async fn session(&self) -> Result<Session, GuiError> {
        self.session
            .lock()
            .await
            .clone()
            .filter(|session| !session.is_cancelled())
            .ok_or_else(|| GuiError::Conflict("settings panel is not open".to_string()))
    }

    async fn credential_ops(&self) -> Result<CredentialOps<'_>, GuiError> {
        Ok(CredentialOps::new(&self.deps, &self.store, self.session().await?))
    }

    async fn integration_ops(&self) -> Result<IntegrationOps<'_>, GuiError> {
        Ok(IntegrationOps::new(&self.deps, &self.store, self.session().await?))
    }

    async fn board_ops(&self) -> Result<BoardOps<'_>, GuiError> {
        Ok(BoardOps::new(&self.deps, &self.store, self.session().await?))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the panel on `initial_tab` (or General) and load its data.
    ///
    /// Any previous session is cancelled first. Load failures end up in
    /// the banner; the returned snapshot reflects whatever did load.
    pub async fn open(&self, initial_tab: Option<&str>) -> StoreSnapshot {
        let session = {
            let mut current = self.session.lock().await;
            if let Some(previous) = current.take() {
                previous.cancel();
            }
            let session = Session::new(self.store.begin_session().await, CancellationToken::new());
            *current = Some(session.clone());
            session
        };
        let state = PanelState::opened(initial_tab);
        info!(
            board_id = %self.board_id(),
            tab = %state.tab,
            generation = session.generation().value(),
            "Settings panel opened"
        );
        *self.state.lock().await = state;

        let credentials = CredentialOps::new(&self.deps, &self.store, session.clone());
        let servers = IntegrationOps::new(&self.deps, &self.store, session.clone());
        let board = BoardOps::new(&self.deps, &self.store, session);
        let (credentials, servers, board) =
            tokio::join!(credentials.load(), servers.load_servers(), board.load());
        debug!(
            credentials = credentials.is_ok(),
            servers = servers.is_ok(),
            board = board.is_ok(),
            "Settings panel loaded"
        );

        self.store.snapshot().await
    }

    /// Close the panel. Outstanding requests are abandoned and their
    /// results discarded.
    pub async fn close(&self) {
        if let Some(session) = self.session.lock().await.take() {
            session.cancel();
        }
        self.store.invalidate().await;
        self.state.lock().await.close();
        info!(board_id = %self.board_id(), "Settings panel closed");
    }

    /// Consume the OAuth markers in `query` and return the query without
    /// them.
    ///
    /// A `connected` marker reloads the credentials once; an error marker
    /// sets the banner. Queries without markers are returned re-encoded
    /// and nothing else happens.
    pub async fn handle_redirect_return(&self, query: &str) -> Result<String, GuiError> {
        let mut query = RedirectQuery::parse(query);
        let markers = query.take_markers();
        if markers.is_empty() {
            return Ok(query.to_string());
        }

        let session = self.session().await?;
        let generation = session.generation();
        let ops = CredentialOps::new(&self.deps, &self.store, session);
        self.store.set_connecting(generation, None).await;

        if markers.iter().any(|m| m.banner().is_none()) {
            info!(board_id = %self.board_id(), "OAuth flow completed; reloading credentials");
            if let Err(e) = ops.load().await {
                debug!(error = %e, "Credential reload after OAuth return failed");
            }
        }
        for marker in &markers {
            if let Some(banner) = marker.banner() {
                warn!(account = %marker.account(), "{banner}");
                self.store.set_error(generation, Some(banner)).await;
            }
        }
        Ok(query.to_string())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub async fn select_tab(&self, tab: SettingsTab) {
        self.state.lock().await.select_tab(tab);
    }

    pub async fn open_add_view(&self) {
        self.state.lock().await.open_add_view();
    }

    pub async fn open_custom_form(&self) {
        self.state.lock().await.open_custom_form();
    }

    /// Step back inside the integrations tab.
    pub async fn back(&self) -> bool {
        self.state.lock().await.back()
    }

    // =========================================================================
    // Credentials
    // =========================================================================

    pub async fn credentials(&self) -> Vec<Credential> {
        self.store.snapshot().await.credentials
    }

    pub async fn reload_credentials(&self) -> Result<Vec<Credential>, GuiError> {
        self.credential_ops().await?.load().await
    }

    pub async fn save_api_key(&self, input: ApiKeyInput) -> Result<ReplaceOutcome, GuiError> {
        self.credential_ops().await?.add_api_key(input).await
    }

    /// Delete a credential; disconnecting an account goes through here too.
    pub async fn remove_credential(&self, credential_id: &str) -> Result<(), GuiError> {
        self.credential_ops().await?.remove(credential_id).await
    }

    pub async fn connect_account(&self, account: AccountId) -> Result<OAuthRedirect, GuiError> {
        self.credential_ops().await?.connect(account).await
    }

    pub async fn api_key_view(&self) -> ApiKeyView {
        credentials::api_key_view(&self.store.snapshot().await)
    }

    pub async fn account_statuses(&self) -> Vec<AccountStatus> {
        credentials::account_statuses(&self.store.snapshot().await)
    }

    // =========================================================================
    // Integrations
    // =========================================================================

    pub async fn reload_servers(&self) -> Result<Vec<ToolServer>, GuiError> {
        self.integration_ops().await?.load_servers().await
    }

    pub async fn load_tools(&self, server_id: &str) -> Result<bool, GuiError> {
        self.integration_ops().await?.load_tools(server_id).await
    }

    /// Register a custom server; on success the tab returns to the list.
    pub async fn add_custom_server(&self, server: &NewToolServer) -> Result<ToolServer, GuiError> {
        let created = self.integration_ops().await?.add_custom(server).await?;
        self.state.lock().await.show_list();
        Ok(created)
    }

    /// Install an account offering; on success the tab returns to the list.
    pub async fn add_account_server(
        &self,
        account: AccountId,
        offering_id: &str,
    ) -> Result<ToolServer, GuiError> {
        let created = self
            .integration_ops()
            .await?
            .add_from_account(account, offering_id)
            .await?;
        self.state.lock().await.show_list();
        Ok(created)
    }

    pub async fn remove_server(&self, server_id: &str) -> Result<(), GuiError> {
        self.integration_ops().await?.remove(server_id).await
    }

    pub async fn available_integrations(&self) -> AvailableIntegrations {
        integrations::available(&self.store.snapshot().await)
    }

    pub async fn server_cards(&self) -> Vec<ServerCard> {
        integrations::server_cards(&self.store.snapshot().await)
    }

    // =========================================================================
    // General
    // =========================================================================

    pub async fn overview(&self) -> Option<BoardOverview> {
        board::overview(&self.store.snapshot().await)
    }

    pub async fn set_name_draft(&self, draft: &str) {
        self.state.lock().await.set_name_draft(draft);
    }

    pub async fn cancel_rename(&self) {
        self.state.lock().await.cancel_rename();
    }

    /// Whether the rename draft differs from the board's name.
    pub async fn has_name_changes(&self) -> bool {
        let current = self.store.snapshot().await.board.map(|b| b.name);
        let state = self.state.lock().await;
        current.is_some_and(|name| state.general.has_changes(&name))
    }

    /// Save the rename draft. Returns whether the board was renamed.
    pub async fn save_name(&self) -> Result<bool, GuiError> {
        let ops = self.board_ops().await?;
        let Some(draft) = self.state.lock().await.general.draft.clone() else {
            return Ok(false);
        };

        self.state.lock().await.general.saving = true;
        let result = ops.rename(&draft).await;
        let mut state = self.state.lock().await;
        state.general.saving = false;
        if result.is_ok() {
            state.general.draft = None;
        }
        result
    }

    // =========================================================================
    // Danger zone
    // =========================================================================

    pub async fn show_delete_confirm(&self) {
        self.state.lock().await.show_delete_confirm();
    }

    pub async fn set_delete_text(&self, typed: &str) {
        self.state.lock().await.set_delete_text(typed);
    }

    pub async fn cancel_delete(&self) {
        self.state.lock().await.cancel_delete();
    }

    /// Whether the typed confirmation matches the board name.
    pub async fn can_delete(&self) -> bool {
        let board = self.store.snapshot().await.board;
        let state = self.state.lock().await;
        board.is_some_and(|b| b.deletion_confirmed(&state.danger.typed))
    }

    /// Delete the board using the typed confirmation, then close the panel.
    pub async fn delete_board(&self) -> Result<(), GuiError> {
        let ops = self.board_ops().await?;
        let typed = self.state.lock().await.danger.typed.clone();
        ops.delete(&typed).await?;
        self.close().await;
        Ok(())
    }
}
