//! Show handler: open the panel on a tab and print it.

use anyhow::Result;
use boardkit_gui::SettingsTab;

use super::{board, credentials, integrations};
use crate::bootstrap::CliContext;

pub async fn execute(ctx: &CliContext, tab: Option<&str>) -> Result<()> {
    match SettingsTab::from_initial(tab) {
        SettingsTab::General => board::show(ctx).await,
        SettingsTab::Credentials => {
            super::open_panel(ctx, SettingsTab::Credentials).await;
            credentials::list(ctx).await
        }
        SettingsTab::Integrations => {
            super::open_panel(ctx, SettingsTab::Integrations).await;
            integrations::list(ctx).await
        }
        SettingsTab::Danger => {
            let snapshot = super::open_panel(ctx, SettingsTab::Danger).await;
            match snapshot.board {
                Some(loaded) => {
                    println!(
                        "Deleting '{}' removes all its columns, tasks and integrations.",
                        loaded.name
                    );
                    println!("Run: boardkit board delete --confirm \"{}\"", loaded.name);
                }
                None => println!("Board not loaded."),
            }
            Ok(())
        }
    }
}
