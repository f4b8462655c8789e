//! Tool-server operations for the settings panel.

use boardkit_core::{
    AccountId, AvailableIntegrations, BoardApiPort, NewToolServer, ServerBranding, ToolServer,
    catalog_entry, find_offering, is_connected, resolve_available,
};
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use tracing::{debug, info, warn};

use crate::deps::PanelDeps;
use crate::error::GuiError;
use crate::session::Session;
use crate::store::{BoardStore, StoreSnapshot};
use crate::types::{ServerCard, ToolSummary};

/// Banner shown when the server list cannot be loaded.
const LOAD_FAILED: &str = "Failed to load integrations";

/// Tool-server operations handler.
pub struct IntegrationOps<'a> {
    api: &'a dyn BoardApiPort,
    store: &'a BoardStore,
    session: Session,
}

impl<'a> IntegrationOps<'a> {
    pub fn new(deps: &'a PanelDeps, store: &'a BoardStore, session: Session) -> Self {
        Self {
            api: deps.api.as_ref(),
            store,
            session,
        }
    }

    /// Fetch the board's servers, then the tools of every server not yet
    /// cached.
    pub async fn load_servers(&self) -> Result<Vec<ToolServer>, GuiError> {
        let generation = self.session.generation();
        self.store.set_loading_servers(generation, true).await;

        match self
            .session
            .run(self.api.get_mcp_servers(self.store.board_id()))
            .await
        {
            Ok(servers) => {
                self.store.set_servers(generation, servers.clone()).await;
                self.fill_missing_tools().await;
                Ok(servers)
            }
            Err(e) => {
                self.store.set_loading_servers(generation, false).await;
                if e != GuiError::Cancelled {
                    warn!(board_id = %self.store.board_id(), error = %e, "Failed to load tool servers");
                    self.store
                        .set_error(generation, Some(e.banner_or(LOAD_FAILED)))
                        .await;
                }
                Err(e)
            }
        }
    }

    /// Fetch tools for every cached server lacking a tools entry.
    ///
    /// Each server is fetched at most once at a time; fetches run
    /// concurrently and each fills only its own slot. Returns how many
    /// fetches succeeded.
    pub async fn fill_missing_tools(&self) -> usize {
        let generation = self.session.generation();
        let claimed = self.store.claim_missing_tools(generation).await;
        if claimed.is_empty() {
            return 0;
        }
        debug!(count = claimed.len(), "Fetching tools for uncached servers");

        let board_id = self.store.board_id();
        let mut fetches: FuturesUnordered<_> = claimed
            .into_iter()
            .map(|server_id| {
                let session = &self.session;
                let api = self.api;
                async move {
                    let result = session
                        .run(api.get_mcp_server_tools(board_id, &server_id))
                        .await;
                    (server_id, result)
                }
            })
            .collect();

        let mut filled = 0;
        while let Some((server_id, result)) = fetches.next().await {
            let tools = match result {
                Ok(tools) => Some(tools),
                Err(GuiError::Cancelled) => None,
                Err(e) => {
                    warn!(%server_id, error = %e, "Failed to fetch server tools");
                    None
                }
            };
            if self.store.fill_tools(generation, &server_id, tools).await {
                filled += 1;
            }
        }
        filled
    }

    /// Fetch tools for one server unless they are cached or already being
    /// fetched. Returns whether a fetch was made and cached.
    pub async fn load_tools(&self, server_id: &str) -> Result<bool, GuiError> {
        let generation = self.session.generation();
        if !self.store.claim_tools(generation, server_id).await {
            return Ok(false);
        }

        let result = self
            .session
            .run(
                self.api
                    .get_mcp_server_tools(self.store.board_id(), server_id),
            )
            .await;
        match result {
            Ok(tools) => Ok(self.store.fill_tools(generation, server_id, Some(tools)).await),
            Err(e) => {
                self.store.fill_tools(generation, server_id, None).await;
                Err(e)
            }
        }
    }

    /// Register a custom server and fetch its tools.
    pub async fn add_custom(&self, server: &NewToolServer) -> Result<ToolServer, GuiError> {
        server.validate().map_err(GuiError::ValidationFailed)?;

        let created = self
            .session
            .run(self.api.create_mcp_server(self.store.board_id(), server))
            .await?;
        info!(server_id = %created.id, name = %created.name, "Custom server added");
        self.installed(created).await
    }

    /// Install a built-in offering of a connected account.
    ///
    /// Only one request per offering may be outstanding.
    pub async fn add_from_account(
        &self,
        account: AccountId,
        offering_id: &str,
    ) -> Result<ToolServer, GuiError> {
        let offering = find_offering(account, offering_id).ok_or_else(|| GuiError::NotFound {
            entity: "offering",
            id: format!("{account}/{offering_id}"),
        })?;

        let snapshot = self.store.snapshot().await;
        let connected = catalog_entry(account)
            .is_some_and(|entry| is_connected(entry, &snapshot.credentials));
        if !connected {
            return Err(GuiError::Conflict(format!(
                "{} account is not connected",
                account.display_name()
            )));
        }

        let generation = self.session.generation();
        if self.session.is_cancelled() {
            return Err(GuiError::Cancelled);
        }
        if !self.store.begin_adding(generation, offering.id).await {
            return Err(GuiError::Conflict(format!(
                "{} is already being added",
                offering.name
            )));
        }

        let result = self
            .session
            .run(
                self.api
                    .create_account_mcp(self.store.board_id(), account, offering.id),
            )
            .await;
        self.store.finish_adding(generation, offering.id).await;

        let created = result?;
        info!(server_id = %created.id, %account, offering = offering.id, "Account server added");
        self.installed(created).await
    }

    /// Delete a server and drop its cached tools.
    pub async fn remove(&self, server_id: &str) -> Result<(), GuiError> {
        self.session
            .run(self.api.delete_mcp_server(self.store.board_id(), server_id))
            .await?;
        info!(server_id, "Server removed");
        self.store
            .remove_server(self.session.generation(), server_id)
            .await;
        Ok(())
    }

    /// Cache a newly created server and fetch its tools.
    async fn installed(&self, server: ToolServer) -> Result<ToolServer, GuiError> {
        self.store
            .add_server(self.session.generation(), server.clone())
            .await;
        if let Err(e) = self.load_tools(&server.id).await {
            warn!(server_id = %server.id, error = %e, "Server added but its tools could not be fetched");
        }
        Ok(server)
    }
}

/// Account offerings that can still be added, and accounts not yet connected.
pub fn available(snapshot: &StoreSnapshot) -> AvailableIntegrations {
    resolve_available(&snapshot.credentials, &snapshot.servers)
}

/// Installed servers as rendered in the integrations list.
pub fn server_cards(snapshot: &StoreSnapshot) -> Vec<ServerCard> {
    snapshot
        .servers
        .iter()
        .map(|server| {
            let tool_names = snapshot
                .tools_for(&server.id)
                .map(|tools| tools.iter().map(|t| t.name.clone()).collect())
                .unwrap_or_default();
            ServerCard {
                id: server.id.clone(),
                name: server.name.clone(),
                status: server.status.clone(),
                branding: ServerBranding::for_server_name(&server.name),
                account_label: server
                    .credential_id
                    .as_deref()
                    .and_then(|id| snapshot.credential(id))
                    .and_then(boardkit_core::Credential::account_label),
                tools: ToolSummary::new(tool_names, &server.status),
            }
        })
        .collect()
}
