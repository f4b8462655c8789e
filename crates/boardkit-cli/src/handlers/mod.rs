//! Command handlers that drive the settings panel.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Open the panel on the tab the command belongs to
//! - Call one `SettingsPanel` operation
//! - Format the result for the terminal (or as JSON)
//!
//! Handlers hold no business rules of their own.

pub mod board;
pub mod credentials;
pub mod integrations;
pub mod oauth;
pub mod show;

use boardkit_gui::{SettingsTab, StoreSnapshot};

use crate::bootstrap::CliContext;
use crate::presentation::print_banner;

/// Open the panel on `tab`, reporting any load failure as a warning.
pub async fn open_panel(ctx: &CliContext, tab: SettingsTab) -> StoreSnapshot {
    let snapshot = ctx.panel.open(Some(tab.id())).await;
    print_banner(snapshot.error.as_deref());
    snapshot
}
