//! Credential operations for the settings panel.

use boardkit_core::{
    ACCOUNT_CATALOG, API_KEY_MASK, AccountId, BoardApiPort, Credential, CredentialType,
    NewCredential, ReplaceOutcome,
};
use tracing::{info, warn};

use crate::deps::PanelDeps;
use crate::error::GuiError;
use crate::session::Session;
use crate::store::{BoardStore, StoreSnapshot};
use crate::types::{AccountConnection, AccountStatus, ApiKeyInput, ApiKeyView, OAuthRedirect};

/// Banner shown when the credential list cannot be loaded.
const LOAD_FAILED: &str = "Failed to load credentials";

/// Banner shown when a credential cannot be deleted.
const DELETE_FAILED: &str = "Failed to delete credential";

/// Credential operations handler.
pub struct CredentialOps<'a> {
    api: &'a dyn BoardApiPort,
    store: &'a BoardStore,
    session: Session,
}

impl<'a> CredentialOps<'a> {
    pub fn new(deps: &'a PanelDeps, store: &'a BoardStore, session: Session) -> Self {
        Self {
            api: deps.api.as_ref(),
            store,
            session,
        }
    }

    /// Fetch the board's credentials into the cache.
    ///
    /// On failure the banner is set and the previous cache is kept.
    pub async fn load(&self) -> Result<Vec<Credential>, GuiError> {
        let generation = self.session.generation();
        self.store.set_loading_credentials(generation, true).await;
        self.store.set_error(generation, None).await;

        match self
            .session
            .run(self.api.get_credentials(self.store.board_id()))
            .await
        {
            Ok(credentials) => {
                self.store
                    .set_credentials(generation, credentials.clone())
                    .await;
                Ok(credentials)
            }
            Err(e) => {
                self.store.set_loading_credentials(generation, false).await;
                if e != GuiError::Cancelled {
                    warn!(board_id = %self.store.board_id(), error = %e, "Failed to load credentials");
                    self.store
                        .set_error(generation, Some(e.banner_or(LOAD_FAILED)))
                        .await;
                }
                Err(e)
            }
        }
    }

    /// Save the board's Anthropic API key, replacing any existing one.
    ///
    /// The existing key (if cached) is deleted before the new one is
    /// created. If that delete fails the new key is still saved and the
    /// outcome names the key that could not be removed.
    pub async fn add_api_key(&self, input: ApiKeyInput) -> Result<ReplaceOutcome, GuiError> {
        let new = NewCredential::anthropic_api_key(&input.name, &input.value);
        if new.value.is_empty() {
            return Err(GuiError::ValidationFailed(
                "API key cannot be empty".to_string(),
            ));
        }

        let generation = self.session.generation();
        if self.session.is_cancelled() {
            return Err(GuiError::Cancelled);
        }
        if !self.store.begin_saving_api_key(generation).await {
            return Err(GuiError::Conflict(
                "An API key is already being saved".to_string(),
            ));
        }
        let snapshot = self.store.snapshot().await;
        let existing = first_of_type(&snapshot.credentials, &CredentialType::AnthropicApiKey)
            .map(|c| c.id.clone());

        let result = self
            .session
            .run(
                self.api
                    .replace_credential(self.store.board_id(), existing.as_deref(), &new),
            )
            .await;
        self.store.set_saving_api_key(generation, false).await;

        let outcome = result?;
        if let Some(ref stale) = outcome.stale_credential_id {
            warn!(credential_id = %stale, "Previous API key is still stored on the backend");
        }
        info!(credential_id = %outcome.credential.id, name = %outcome.credential.name, "API key saved");
        self.store
            .upsert_credential(generation, outcome.credential.clone())
            .await;
        Ok(outcome)
    }

    /// Delete a credential. Disconnecting an account is the same call.
    ///
    /// The request is sent even when the id is not cached.
    pub async fn remove(&self, credential_id: &str) -> Result<(), GuiError> {
        let generation = self.session.generation();
        match self
            .session
            .run(
                self.api
                    .delete_credential(self.store.board_id(), credential_id),
            )
            .await
        {
            Ok(()) => {
                info!(credential_id, "Credential deleted");
                self.store.remove_credential(generation, credential_id).await;
                Ok(())
            }
            Err(e) => {
                if e != GuiError::Cancelled {
                    self.store
                        .set_error(generation, Some(e.banner_or(DELETE_FAILED)))
                        .await;
                }
                Err(e)
            }
        }
    }

    /// Start the OAuth flow for `account`.
    ///
    /// On success the account stays marked as connecting; the front end
    /// navigates away and the marker is dropped with the session.
    pub async fn connect(&self, account: AccountId) -> Result<OAuthRedirect, GuiError> {
        let generation = self.session.generation();
        self.store.set_connecting(generation, Some(account)).await;
        self.store.set_error(generation, None).await;

        match self
            .session
            .run(self.api.get_oauth_url(self.store.board_id(), account))
            .await
        {
            Ok(oauth) => {
                info!(%account, "OAuth flow started");
                Ok(OAuthRedirect {
                    account_id: account,
                    url: oauth.url,
                })
            }
            Err(e) => {
                self.store.set_connecting(generation, None).await;
                if e != GuiError::Cancelled {
                    let fallback = format!("Failed to connect {account}");
                    self.store
                        .set_error(generation, Some(e.banner_or(&fallback)))
                        .await;
                }
                Err(e)
            }
        }
    }
}

fn first_of_type<'c>(
    credentials: &'c [Credential],
    credential_type: &CredentialType,
) -> Option<&'c Credential> {
    credentials
        .iter()
        .find(|c| &c.credential_type == credential_type)
}

/// API key section state.
pub fn api_key_view(snapshot: &StoreSnapshot) -> ApiKeyView {
    let key = first_of_type(&snapshot.credentials, &CredentialType::AnthropicApiKey);
    let submit_label = if snapshot.saving_api_key {
        "Saving..."
    } else if key.is_some() {
        "Replace"
    } else {
        "Save"
    };
    ApiKeyView {
        name: key.map(|c| c.name.clone()),
        masked: key.map(|_| API_KEY_MASK),
        submit_label,
        saving: snapshot.saving_api_key,
    }
}

/// Connection state of every catalog account, in catalog order.
pub fn account_statuses(snapshot: &StoreSnapshot) -> Vec<AccountStatus> {
    ACCOUNT_CATALOG
        .iter()
        .map(|entry| {
            let credential_type = entry.credential_type();
            AccountStatus {
                account_id: entry.account,
                name: entry.account.display_name(),
                description: entry.account.description(),
                connecting: snapshot.connecting == Some(entry.account),
                connections: snapshot
                    .credentials
                    .iter()
                    .filter(|c| c.credential_type == credential_type)
                    .map(|c| AccountConnection {
                        credential_id: c.id.clone(),
                        name: c.name.clone(),
                        label: c.account_label(),
                    })
                    .collect(),
            }
        })
        .collect()
}
