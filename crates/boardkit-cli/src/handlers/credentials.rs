//! Credential command handlers.

use anyhow::Result;
use boardkit_core::AccountId;
use boardkit_gui::SettingsTab;
use boardkit_gui::types::ApiKeyInput;
use tracing::warn;

use super::open_panel;
use crate::bootstrap::CliContext;
use crate::commands::CredentialsCommand;
use crate::error::CliError;
use crate::presentation::{format_optional, print_json};

pub async fn execute(ctx: &CliContext, command: CredentialsCommand) -> Result<()> {
    open_panel(ctx, SettingsTab::Credentials).await;
    match command {
        CredentialsCommand::List => list(ctx).await,
        CredentialsCommand::SetKey { name, value } => set_key(ctx, name, value).await,
        CredentialsCommand::Remove { id } => remove(ctx, &id).await,
        CredentialsCommand::Connect { account } => connect(ctx, account).await,
    }
}

/// Print the API key section and the connected accounts.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let key = ctx.panel.api_key_view().await;
    let accounts = ctx.panel.account_statuses().await;

    if ctx.json {
        print_json(&serde_json::json!({ "apiKey": key, "accounts": accounts }))?;
        return Ok(());
    }

    println!("Anthropic API key");
    match (&key.name, key.masked) {
        (Some(name), Some(masked)) => println!("  {name}  {masked}"),
        _ => println!("  (not set)"),
    }

    println!();
    println!("Connected accounts");
    for account in accounts {
        if account.connections.is_empty() {
            println!("  {:<8} not connected  ({})", account.name, account.description);
            continue;
        }
        for connection in &account.connections {
            println!(
                "  {:<8} {:<24} {}  [{}]",
                account.name,
                connection.name,
                format_optional(connection.label.as_deref(), "--"),
                connection.credential_id
            );
        }
    }
    Ok(())
}

async fn set_key(ctx: &CliContext, name: String, value: String) -> Result<()> {
    let outcome = ctx
        .panel
        .save_api_key(ApiKeyInput { name, value })
        .await
        .map_err(CliError::from)?;

    if let Some(stale) = &outcome.stale_credential_id {
        warn!(credential_id = %stale, "Previous API key could not be removed");
        eprintln!("warning: previous API key {stale} could not be removed; delete it with 'credentials remove {stale}'");
    }
    if ctx.json {
        print_json(&outcome.credential)?;
    } else {
        println!("Saved API key '{}' ({}).", outcome.credential.name, outcome.credential.id);
    }
    Ok(())
}

async fn remove(ctx: &CliContext, id: &str) -> Result<()> {
    ctx.panel
        .remove_credential(id)
        .await
        .map_err(CliError::from)?;
    println!("Removed credential {id}.");
    Ok(())
}

async fn connect(ctx: &CliContext, account: AccountId) -> Result<()> {
    let redirect = ctx
        .panel
        .connect_account(account)
        .await
        .map_err(CliError::from)?;

    if ctx.json {
        print_json(&redirect)?;
    } else {
        println!("Open this URL to connect {}:", account.display_name());
        println!("{}", redirect.url);
        println!();
        println!("Afterwards pass the query string you land on to 'boardkit oauth-return'.");
    }
    Ok(())
}
