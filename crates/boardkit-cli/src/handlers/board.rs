//! Board command handlers (general and danger tabs).

use anyhow::Result;
use boardkit_gui::{GuiError, SettingsTab};

use super::open_panel;
use crate::bootstrap::CliContext;
use crate::commands::BoardCommand;
use crate::error::CliError;
use crate::presentation::{print_json, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, command: BoardCommand) -> Result<()> {
    match command {
        BoardCommand::Show => show(ctx).await,
        BoardCommand::Rename { name } => rename(ctx, &name).await,
        BoardCommand::Delete { confirm } => delete(ctx, &confirm).await,
    }
}

/// Print the board overview.
pub async fn show(ctx: &CliContext) -> Result<()> {
    let snapshot = open_panel(ctx, SettingsTab::General).await;
    let overview = boardkit_gui::overview(&snapshot).ok_or_else(|| {
        CliError::NotFound(
            snapshot
                .error
                .clone()
                .unwrap_or_else(|| format!("board not found: {}", ctx.panel.board_id())),
        )
    })?;

    if ctx.json {
        print_json(&overview)?;
        return Ok(());
    }

    println!("Name:        {}", overview.name);
    println!("ID:          {}", overview.id);
    println!("Created:     {}", overview.created_at);
    println!("Total tasks: {}", overview.total_tasks);
    if !overview.columns.is_empty() {
        println!();
        println!("{:<30} Tasks", "Column");
        print_separator(38);
        for column in &overview.columns {
            println!("{:<30} {}", truncate_string(&column.name, 29), column.count);
        }
    }
    Ok(())
}

async fn rename(ctx: &CliContext, name: &str) -> Result<()> {
    open_panel(ctx, SettingsTab::General).await;
    ctx.panel.set_name_draft(name).await;
    let renamed = ctx.panel.save_name().await.map_err(CliError::from)?;

    if renamed {
        println!("Renamed board to '{}'.", name.trim());
    } else {
        println!("Nothing to change.");
    }
    Ok(())
}

async fn delete(ctx: &CliContext, confirm: &str) -> Result<()> {
    open_panel(ctx, SettingsTab::Danger).await;
    ctx.panel.show_delete_confirm().await;
    ctx.panel.set_delete_text(confirm).await;

    match ctx.panel.delete_board().await {
        Ok(()) => {
            println!("Board deleted.");
            Ok(())
        }
        Err(GuiError::ValidationFailed(msg)) => {
            ctx.panel.cancel_delete().await;
            Err(CliError::Arguments(msg).into())
        }
        Err(e) => Err(CliError::from(e).into()),
    }
}
