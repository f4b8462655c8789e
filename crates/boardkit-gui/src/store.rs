//! Per-board settings store.
//!
//! `BoardStore` owns the client-side caches the settings panel works
//! from: credentials, tool servers, cached tool lists, the board overview
//! and the transient flags the front end renders (loading, saving,
//! connecting, adding). Readers take a [`StoreSnapshot`]; changes are
//! broadcast as [`StoreEvent`]s.
//!
//! Every mutation carries the [`Generation`] it was started under. When
//! the panel is closed or reopened the generation moves on and late
//! writes are dropped.

use std::collections::{BTreeSet, HashMap, HashSet};

use boardkit_core::{AccountId, Board, Credential, StoreEvent, Tool, ToolServer};
use serde::Serialize;
use tokio::sync::{RwLock, RwLockWriteGuard, broadcast};
use tracing::debug;

/// Broadcast channel capacity for store events
const CHANNEL_CAPACITY: usize = 64;

/// Panel session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Point-in-time copy of the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub credentials: Vec<Credential>,
    pub servers: Vec<ToolServer>,
    /// Cached tool lists keyed by server id
    pub tools: HashMap<String, Vec<Tool>>,
    pub board: Option<Board>,
    pub loading_credentials: bool,
    pub loading_servers: bool,
    pub saving_api_key: bool,
    /// Account whose OAuth flow is being started
    pub connecting: Option<AccountId>,
    /// Offering ids with an account-server creation in flight
    pub adding_offerings: BTreeSet<String>,
    /// Error banner
    pub error: Option<String>,
}

impl StoreSnapshot {
    /// Cached tools for a server, if fetched.
    pub fn tools_for(&self, server_id: &str) -> Option<&[Tool]> {
        self.tools.get(server_id).map(Vec::as_slice)
    }

    /// Credential by id.
    pub fn credential(&self, credential_id: &str) -> Option<&Credential> {
        self.credentials.iter().find(|c| c.id == credential_id)
    }
}

struct StoreState {
    generation: u64,
    snapshot: StoreSnapshot,
    /// Server ids with a tools fetch outstanding
    tools_in_flight: HashSet<String>,
}

/// Owned state container for one board's settings.
pub struct BoardStore {
    board_id: String,
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
}

impl BoardStore {
    /// Create an empty store for `board_id`.
    pub fn new(board_id: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            board_id: board_id.into(),
            state: RwLock::new(StoreState {
                generation: 0,
                snapshot: StoreSnapshot::default(),
                tools_in_flight: HashSet::new(),
            }),
            events,
        }
    }

    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.snapshot.clone()
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Current generation.
    pub async fn generation(&self) -> Generation {
        Generation(self.state.read().await.generation)
    }

    /// Whether `generation` is still the live session.
    pub async fn is_current(&self, generation: Generation) -> bool {
        self.state.read().await.generation == generation.0
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Start a new session: clear everything and move to a new generation.
    pub async fn begin_session(&self) -> Generation {
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.snapshot = StoreSnapshot::default();
            state.tools_in_flight.clear();
            state.generation
        };
        debug!(board_id = %self.board_id, generation, "Settings session started");
        self.emit(StoreEvent::Reset);
        Generation(generation)
    }

    /// End the current session. Cached data stays readable; in-flight
    /// markers are cleared and pending writes become stale.
    pub async fn invalidate(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.tools_in_flight.clear();
        let snapshot = &mut state.snapshot;
        snapshot.loading_credentials = false;
        snapshot.loading_servers = false;
        snapshot.saving_api_key = false;
        snapshot.connecting = None;
        snapshot.adding_offerings.clear();
        debug!(board_id = %self.board_id, generation = state.generation, "Settings session ended");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn emit(&self, event: StoreEvent) {
        if self.events.receiver_count() > 0 {
            debug!(?event, "Broadcasting store event");
            let _ = self.events.send(event);
        }
    }

    /// Write access if `generation` is still live.
    async fn current(&self, generation: Generation) -> Option<RwLockWriteGuard<'_, StoreState>> {
        let state = self.state.write().await;
        if state.generation == generation.0 {
            Some(state)
        } else {
            debug!(
                board_id = %self.board_id,
                stale = generation.0,
                current = state.generation,
                "Dropping stale store update"
            );
            None
        }
    }

    // =========================================================================
    // Banner
    // =========================================================================

    pub async fn set_error(&self, generation: Generation, message: Option<String>) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        if state.snapshot.error == message {
            return true;
        }
        state.snapshot.error.clone_from(&message);
        drop(state);
        self.emit(StoreEvent::ErrorChanged { message });
        true
    }

    // =========================================================================
    // Credentials
    // =========================================================================

    pub async fn set_loading_credentials(&self, generation: Generation, loading: bool) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.loading_credentials = loading;
        true
    }

    pub async fn set_credentials(&self, generation: Generation, credentials: Vec<Credential>) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let count = credentials.len();
        state.snapshot.credentials = credentials;
        state.snapshot.loading_credentials = false;
        drop(state);
        self.emit(StoreEvent::CredentialsLoaded { count });
        true
    }

    /// Merge a newly created credential: a cached credential of the same
    /// type is replaced in place, otherwise the new one is appended.
    pub async fn upsert_credential(&self, generation: Generation, credential: Credential) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let event = StoreEvent::CredentialUpserted {
            credential_id: credential.id.clone(),
            credential_type: credential.credential_type.clone(),
        };
        let credentials = &mut state.snapshot.credentials;
        match credentials
            .iter()
            .position(|c| c.credential_type == credential.credential_type)
        {
            Some(index) => credentials[index] = credential,
            None => credentials.push(credential),
        }
        drop(state);
        self.emit(event);
        true
    }

    pub async fn remove_credential(&self, generation: Generation, credential_id: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let before = state.snapshot.credentials.len();
        state.snapshot.credentials.retain(|c| c.id != credential_id);
        let removed = state.snapshot.credentials.len() != before;
        drop(state);
        if removed {
            self.emit(StoreEvent::CredentialRemoved {
                credential_id: credential_id.to_string(),
            });
        }
        true
    }

    /// Mark an API-key save as in flight. Returns `false` when one already
    /// is, or when `generation` is stale.
    pub async fn begin_saving_api_key(&self, generation: Generation) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        if state.snapshot.saving_api_key {
            return false;
        }
        state.snapshot.saving_api_key = true;
        true
    }

    pub async fn set_saving_api_key(&self, generation: Generation, saving: bool) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.saving_api_key = saving;
        true
    }

    pub async fn set_connecting(&self, generation: Generation, account: Option<AccountId>) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.connecting = account;
        true
    }

    // =========================================================================
    // Board
    // =========================================================================

    pub async fn set_board(&self, generation: Generation, board: Board) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.board = Some(board);
        drop(state);
        self.emit(StoreEvent::BoardLoaded);
        true
    }

    /// Apply a successful rename to the cached board.
    pub async fn rename_board(&self, generation: Generation, name: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let Some(board) = state.snapshot.board.as_mut() else {
            return true;
        };
        name.clone_into(&mut board.name);
        drop(state);
        self.emit(StoreEvent::BoardLoaded);
        true
    }

    // =========================================================================
    // Tool servers
    // =========================================================================

    pub async fn set_loading_servers(&self, generation: Generation, loading: bool) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.loading_servers = loading;
        true
    }

    /// Replace the server list. Tool slots of servers that disappeared
    /// are dropped; slots of surviving servers are kept.
    pub async fn set_servers(&self, generation: Generation, servers: Vec<ToolServer>) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let live: HashSet<&str> = servers.iter().map(|s| s.id.as_str()).collect();
        let StoreState {
            snapshot,
            tools_in_flight,
            ..
        } = &mut *state;
        snapshot.tools.retain(|id, _| live.contains(id.as_str()));
        tools_in_flight.retain(|id| live.contains(id.as_str()));
        drop(live);

        let count = servers.len();
        state.snapshot.servers = servers;
        state.snapshot.loading_servers = false;
        drop(state);
        self.emit(StoreEvent::ServersLoaded { count });
        true
    }

    pub async fn add_server(&self, generation: Generation, server: ToolServer) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        let event = StoreEvent::ServerAdded {
            server_id: server.id.clone(),
            name: server.name.clone(),
        };
        state.snapshot.servers.push(server);
        drop(state);
        self.emit(event);
        true
    }

    /// Remove a server together with its cached tools.
    pub async fn remove_server(&self, generation: Generation, server_id: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.servers.retain(|s| s.id != server_id);
        state.snapshot.tools.remove(server_id);
        state.tools_in_flight.remove(server_id);
        drop(state);
        self.emit(StoreEvent::ServerRemoved {
            server_id: server_id.to_string(),
        });
        true
    }

    // =========================================================================
    // Tool cache
    // =========================================================================

    /// Claim every server that has neither cached tools nor a fetch in
    /// flight. Returns the claimed ids in server order.
    pub async fn claim_missing_tools(&self, generation: Generation) -> Vec<String> {
        let Some(mut state) = self.current(generation).await else {
            return Vec::new();
        };
        let StoreState {
            snapshot,
            tools_in_flight,
            ..
        } = &mut *state;

        let mut claimed = Vec::new();
        for server in &snapshot.servers {
            if !snapshot.tools.contains_key(&server.id) && tools_in_flight.insert(server.id.clone()) {
                claimed.push(server.id.clone());
            }
        }
        claimed
    }

    /// Claim a single server for a tools fetch.
    pub async fn claim_tools(&self, generation: Generation, server_id: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        if state.snapshot.tools.contains_key(server_id) {
            return false;
        }
        state.tools_in_flight.insert(server_id.to_string())
    }

    /// Finish a tools fetch. `None` (failed fetch) leaves the slot empty.
    ///
    /// The result is only cached if the server is still installed.
    pub async fn fill_tools(
        &self,
        generation: Generation,
        server_id: &str,
        tools: Option<Vec<Tool>>,
    ) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.tools_in_flight.remove(server_id);

        let Some(tools) = tools else {
            return false;
        };
        if !state.snapshot.servers.iter().any(|s| s.id == server_id) {
            debug!(server_id, "Dropping tools for removed server");
            return false;
        }

        let count = tools.len();
        state.snapshot.tools.insert(server_id.to_string(), tools);
        drop(state);
        self.emit(StoreEvent::ToolsLoaded {
            server_id: server_id.to_string(),
            count,
        });
        true
    }

    /// Whether a tools fetch for `server_id` is outstanding.
    pub async fn tools_in_flight(&self, server_id: &str) -> bool {
        self.state.read().await.tools_in_flight.contains(server_id)
    }

    // =========================================================================
    // Account offerings
    // =========================================================================

    /// Mark an offering as being added. Returns false if it already is.
    pub async fn begin_adding(&self, generation: Generation, offering_id: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.adding_offerings.insert(offering_id.to_string())
    }

    pub async fn finish_adding(&self, generation: Generation, offering_id: &str) -> bool {
        let Some(mut state) = self.current(generation).await else {
            return false;
        };
        state.snapshot.adding_offerings.remove(offering_id)
    }
}
