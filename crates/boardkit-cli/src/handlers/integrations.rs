//! Integration (tool server) command handlers.

use anyhow::Result;
use boardkit_core::{AccountId, NewToolServer};
use boardkit_gui::SettingsTab;
use boardkit_gui::types::ServerCard;

use super::open_panel;
use crate::bootstrap::CliContext;
use crate::commands::IntegrationsCommand;
use crate::error::CliError;
use crate::presentation::{format_optional, print_json, print_separator, truncate_string};

pub async fn execute(ctx: &CliContext, command: IntegrationsCommand) -> Result<()> {
    open_panel(ctx, SettingsTab::Integrations).await;
    match command {
        IntegrationsCommand::List => list(ctx).await,
        IntegrationsCommand::Available => available(ctx).await,
        IntegrationsCommand::AddAccount { account, offering } => {
            add_account(ctx, account, &offering).await
        }
        IntegrationsCommand::AddCustom { name, url, headers } => {
            let server = headers
                .into_iter()
                .fold(NewToolServer::new(name, url), |server, (key, value)| {
                    server.with_header(key, value)
                });
            add_custom(ctx, &server).await
        }
        IntegrationsCommand::Remove { id } => remove(ctx, &id).await,
    }
}

/// Print installed servers with their tools.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let cards = ctx.panel.server_cards().await;
    if ctx.json {
        print_json(&cards)?;
        return Ok(());
    }

    if cards.is_empty() {
        println!("No integrations installed.");
        println!("Use 'boardkit integrations available' to see what can be added.");
        return Ok(());
    }

    println!(
        "{:<14} {:<20} {:<13} {:<24} Tools",
        "ID", "Name", "Status", "Account"
    );
    print_separator(100);
    for card in &cards {
        print_card(card);
    }
    Ok(())
}

fn print_card(card: &ServerCard) {
    println!(
        "{:<14} {:<20} {:<13} {:<24} {}",
        truncate_string(&card.id, 13),
        truncate_string(&card.name, 19),
        card.status.as_str(),
        truncate_string(&format_optional(card.account_label.as_deref(), "--"), 23),
        card.tools
    );
}

async fn available(ctx: &CliContext) -> Result<()> {
    let available = ctx.panel.available_integrations().await;
    if ctx.json {
        print_json(&available)?;
        return Ok(());
    }

    if available.is_empty() {
        println!("Everything available is already installed.");
        return Ok(());
    }
    for tool in &available.available_account_tools {
        println!(
            "  {:<8} {:<16} {:<16} {}",
            tool.account_id.as_str(),
            tool.offering_id,
            tool.name,
            tool.description
        );
    }
    if !available.unconnected_accounts.is_empty() {
        println!();
        println!("Connect an account to unlock more:");
        for account in &available.unconnected_accounts {
            println!("  {:<8} {}", account.account_id.as_str(), account.description);
        }
    }
    Ok(())
}

async fn add_account(ctx: &CliContext, account: AccountId, offering: &str) -> Result<()> {
    ctx.panel.open_add_view().await;
    let server = ctx
        .panel
        .add_account_server(account, offering)
        .await
        .map_err(CliError::from)?;
    println!("Added {} ({}).", server.name, server.id);
    Ok(())
}

async fn add_custom(ctx: &CliContext, server: &NewToolServer) -> Result<()> {
    ctx.panel.open_custom_form().await;
    let created = ctx
        .panel
        .add_custom_server(server)
        .await
        .map_err(CliError::from)?;
    println!("Added {} ({}).", created.name, created.id);
    Ok(())
}

async fn remove(ctx: &CliContext, id: &str) -> Result<()> {
    ctx.panel.remove_server(id).await.map_err(CliError::from)?;
    println!("Removed integration {id}.");
    Ok(())
}
