//! Recording fake of the board API for facade tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use boardkit_core::{
    AccountId, ApiPortError, ApiResult, Board, BoardApiPort, Credential, CredentialType,
    NewCredential, NewToolServer, OAuthUrl, Tool, ToolServer, ToolServerStatus, find_offering,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::deps::PanelDeps;
use crate::session::Session;
use crate::store::BoardStore;

pub const BOARD_ID: &str = "b1";

#[derive(Default)]
struct FakeState {
    credentials: Vec<Credential>,
    servers: Vec<ToolServer>,
    tools: HashMap<String, Vec<Tool>>,
    board: Option<Board>,
    failures: HashMap<String, ApiPortError>,
    delays: HashMap<String, Duration>,
    calls: Vec<String>,
    created_values: Vec<String>,
    next_id: usize,
}

/// In-memory board backend that records every call.
///
/// Calls are recorded as `op` or `op:arg`. Failures and delays can be
/// keyed on either form; the `op:arg` form wins.
#[derive(Clone, Default)]
pub struct FakeBoardApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBoardApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(self, credentials: Vec<Credential>) -> Self {
        self.state.lock().unwrap().credentials = credentials;
        self
    }

    pub fn with_servers(self, servers: Vec<ToolServer>) -> Self {
        self.state.lock().unwrap().servers = servers;
        self
    }

    pub fn with_tools(self, server_id: &str, tools: Vec<Tool>) -> Self {
        self.state
            .lock()
            .unwrap()
            .tools
            .insert(server_id.to_string(), tools);
        self
    }

    pub fn with_board(self, board: Board) -> Self {
        self.state.lock().unwrap().board = Some(board);
        self
    }

    pub fn fail(self, key: &str, error: ApiPortError) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(key.to_string(), error);
        self
    }

    pub fn with_delay(self, key: &str, delay: Duration) -> Self {
        self.state
            .lock()
            .unwrap()
            .delays
            .insert(key.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    /// Secret values passed to `create_credential`, in order.
    pub fn created_values(&self) -> Vec<String> {
        self.state.lock().unwrap().created_values.clone()
    }

    /// Record a call, wait out its delay and return its injected failure.
    async fn enter(&self, op: &str, arg: Option<&str>) -> ApiResult<()> {
        let label = arg.map_or_else(|| op.to_string(), |arg| format!("{op}:{arg}"));
        let (delay, failure) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(label.clone());
            let delay = state
                .delays
                .get(&label)
                .or_else(|| state.delays.get(op))
                .copied();
            let failure = state
                .failures
                .get(&label)
                .or_else(|| state.failures.get(op))
                .cloned();
            (delay, failure)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        failure.map_or(Ok(()), Err)
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        format!("{prefix}-{}", state.next_id)
    }
}

#[async_trait]
impl BoardApiPort for FakeBoardApi {
    async fn get_credentials(&self, _board_id: &str) -> ApiResult<Vec<Credential>> {
        self.enter("get_credentials", None).await?;
        Ok(self.state.lock().unwrap().credentials.clone())
    }

    async fn create_credential(
        &self,
        board_id: &str,
        credential: &NewCredential,
    ) -> ApiResult<Credential> {
        self.enter("create_credential", Some(credential.credential_type.as_str()))
            .await?;
        let created = Credential {
            id: self.next_id("cred"),
            board_id: board_id.to_string(),
            credential_type: credential.credential_type.clone(),
            name: credential.name.clone(),
            metadata: serde_json::Map::new(),
            created_at: None,
        };
        let mut state = self.state.lock().unwrap();
        state.created_values.push(credential.value.clone());
        state.credentials.push(created.clone());
        Ok(created)
    }

    async fn delete_credential(&self, _board_id: &str, credential_id: &str) -> ApiResult<()> {
        self.enter("delete_credential", Some(credential_id)).await?;
        self.state
            .lock()
            .unwrap()
            .credentials
            .retain(|c| c.id != credential_id);
        Ok(())
    }

    async fn get_oauth_url(&self, board_id: &str, account: AccountId) -> ApiResult<OAuthUrl> {
        self.enter("get_oauth_url", Some(account.as_str())).await?;
        Ok(OAuthUrl {
            url: format!("https://auth.example.com/{account}/authorize?state={board_id}"),
        })
    }

    async fn get_mcp_servers(&self, _board_id: &str) -> ApiResult<Vec<ToolServer>> {
        self.enter("get_mcp_servers", None).await?;
        Ok(self.state.lock().unwrap().servers.clone())
    }

    async fn get_mcp_server_tools(&self, _board_id: &str, server_id: &str) -> ApiResult<Vec<Tool>> {
        self.enter("get_mcp_server_tools", Some(server_id)).await?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .tools
            .get(server_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_mcp_server(
        &self,
        board_id: &str,
        server: &NewToolServer,
    ) -> ApiResult<ToolServer> {
        self.enter("create_mcp_server", Some(&server.name)).await?;
        let created = ToolServer {
            id: self.next_id("srv"),
            board_id: board_id.to_string(),
            name: server.name.clone(),
            status: ToolServerStatus::Connected,
            credential_id: None,
        };
        self.state.lock().unwrap().servers.push(created.clone());
        Ok(created)
    }

    async fn create_account_mcp(
        &self,
        board_id: &str,
        account: AccountId,
        offering_id: &str,
    ) -> ApiResult<ToolServer> {
        self.enter("create_account_mcp", Some(offering_id)).await?;
        let offering = find_offering(account, offering_id).ok_or_else(|| ApiPortError::NotFound {
            message: format!("Unknown MCP: {offering_id}"),
        })?;
        let id = self.next_id("srv");
        let mut state = self.state.lock().unwrap();
        let credential_type = account.credential_type();
        let created = ToolServer {
            id,
            board_id: board_id.to_string(),
            name: offering.name.to_string(),
            status: ToolServerStatus::Connected,
            credential_id: state
                .credentials
                .iter()
                .find(|c| c.credential_type == credential_type)
                .map(|c| c.id.clone()),
        };
        state.servers.push(created.clone());
        Ok(created)
    }

    async fn delete_mcp_server(&self, _board_id: &str, server_id: &str) -> ApiResult<()> {
        self.enter("delete_mcp_server", Some(server_id)).await?;
        self.state
            .lock()
            .unwrap()
            .servers
            .retain(|s| s.id != server_id);
        Ok(())
    }

    async fn get_board(&self, board_id: &str) -> ApiResult<Board> {
        self.enter("get_board", None).await?;
        self.state
            .lock()
            .unwrap()
            .board
            .clone()
            .ok_or_else(|| ApiPortError::NotFound {
                message: format!("Board not found: {board_id}"),
            })
    }

    async fn rename_board(&self, _board_id: &str, name: &str) -> ApiResult<()> {
        self.enter("rename_board", Some(name)).await?;
        if let Some(board) = self.state.lock().unwrap().board.as_mut() {
            board.name = name.to_string();
        }
        Ok(())
    }

    async fn delete_board(&self, _board_id: &str) -> ApiResult<()> {
        self.enter("delete_board", None).await?;
        self.state.lock().unwrap().board = None;
        Ok(())
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn credential(id: &str, credential_type: CredentialType) -> Credential {
    Credential {
        id: id.to_string(),
        board_id: BOARD_ID.to_string(),
        name: format!("{} credential", credential_type.as_str()),
        credential_type,
        metadata: serde_json::Map::new(),
        created_at: None,
    }
}

pub fn server(id: &str, name: &str) -> ToolServer {
    ToolServer {
        id: id.to_string(),
        board_id: BOARD_ID.to_string(),
        name: name.to_string(),
        status: ToolServerStatus::Connected,
        credential_id: None,
    }
}

pub fn tool(name: &str) -> Tool {
    Tool {
        name: name.to_string(),
        description: None,
        input_schema: None,
    }
}

/// A board with three tasks: two in "To Do" (position 0), one in "Done".
pub fn board(id: &str, name: &str) -> Board {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "createdAt": "2026-01-02T03:04:05Z",
        "columns": [
            {"id": "done", "name": "Done", "position": 1},
            {"id": "todo", "name": "To Do", "position": 0}
        ],
        "tasks": [
            {"id": "t1", "columnId": "todo", "title": "Write docs"},
            {"id": "t2", "columnId": "todo", "title": "Ship it"},
            {"id": "t3", "columnId": "done", "title": "Plan"}
        ]
    }))
    .unwrap()
}

/// Fresh store with a live session over `api`.
pub async fn open_session(api: FakeBoardApi) -> (PanelDeps, BoardStore, Session) {
    let deps = PanelDeps::new(Arc::new(api));
    let store = BoardStore::new(BOARD_ID);
    let session = Session::new(store.begin_session().await, CancellationToken::new());
    (deps, store, session)
}
