//! OAuth return handler.

use anyhow::Result;
use boardkit_gui::SettingsTab;

use super::{credentials, open_panel};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_banner;

/// Consume the OAuth markers in `query`, then show the credentials tab.
pub async fn execute(ctx: &CliContext, query: &str) -> Result<()> {
    open_panel(ctx, SettingsTab::Credentials).await;
    let remaining = ctx
        .panel
        .handle_redirect_return(query)
        .await
        .map_err(CliError::from)?;
    print_banner(ctx.panel.snapshot().await.error.as_deref());

    if !ctx.json {
        if remaining.is_empty() {
            println!("Remaining query: (empty)");
        } else {
            println!("Remaining query: ?{remaining}");
        }
        println!();
    }
    credentials::list(ctx).await
}
