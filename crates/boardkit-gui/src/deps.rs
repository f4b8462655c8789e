//! Dependency injection for the settings panel.
//!
//! Dependencies are injected as trait objects to keep the facade
//! adapter-neutral.

use std::sync::Arc;

use boardkit_core::BoardApiPort;

/// Dependencies required to construct a `SettingsPanel`.
///
/// # Example
///
/// ```ignore
/// let api = Arc::new(DefaultBoardApiClient::new(&config)?);
/// let panel = SettingsPanel::new(PanelDeps::new(api), "board-1");
/// ```
#[derive(Clone)]
pub struct PanelDeps {
    /// Board REST backend.
    pub(crate) api: Arc<dyn BoardApiPort>,
}

impl PanelDeps {
    pub fn new(api: Arc<dyn BoardApiPort>) -> Self {
        Self { api }
    }
}
