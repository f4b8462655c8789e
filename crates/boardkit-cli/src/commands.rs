//! Main commands enum and per-tab subcommands.
//!
//! Each command group corresponds to one tab of the settings panel.

use boardkit_core::AccountId;
use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Open the settings panel and print the current state of a tab
    Show {
        /// Tab to open (general, credentials, integrations, danger)
        #[arg(short, long)]
        tab: Option<String>,
    },

    /// Board name, overview and deletion
    Board {
        #[command(subcommand)]
        command: BoardCommand,
    },

    /// API key and connected accounts
    Credentials {
        #[command(subcommand)]
        command: CredentialsCommand,
    },

    /// Tool servers installed on the board
    Integrations {
        #[command(subcommand)]
        command: IntegrationsCommand,
    },

    /// Process the query string the browser returned to after an OAuth flow
    OauthReturn {
        /// Query string, with or without the leading '?'
        query: String,
    },
}

#[derive(Subcommand)]
pub enum BoardCommand {
    /// Show the board overview and task counts per column
    Show,

    /// Rename the board
    Rename {
        /// New name (surrounding whitespace is ignored)
        name: String,
    },

    /// Delete the board permanently
    Delete {
        /// The board's exact name, to confirm
        #[arg(long)]
        confirm: String,
    },
}

#[derive(Subcommand)]
pub enum CredentialsCommand {
    /// List the API key and connected accounts
    List,

    /// Save the board's Anthropic API key, replacing any existing one
    SetKey {
        /// Display name (defaults to "Anthropic API Key")
        #[arg(long, default_value = "")]
        name: String,
        /// Secret key value
        #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
        value: String,
    },

    /// Delete a credential (also disconnects an account)
    Remove {
        /// Credential ID
        id: String,
    },

    /// Start connecting an account and print the authorization URL
    Connect {
        /// Account to connect (github, google)
        account: AccountId,
    },
}

#[derive(Subcommand)]
pub enum IntegrationsCommand {
    /// List installed tool servers
    List,

    /// List accounts to connect and account tools that can be added
    Available,

    /// Add a built-in tool of a connected account
    AddAccount {
        /// Account the tool belongs to (github, google)
        account: AccountId,
        /// Offering ID (e.g. gmail, google-docs, github)
        offering: String,
    },

    /// Register a custom tool server
    AddCustom {
        /// Display name
        #[arg(long)]
        name: String,
        /// Server endpoint (http:// or https://)
        #[arg(long)]
        url: String,
        /// Extra request header as KEY=VALUE (repeatable)
        #[arg(long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,
    },

    /// Remove a tool server
    Remove {
        /// Server ID
        id: String,
    },
}

/// Parse a `KEY=VALUE` header argument. Only the first `=` separates.
fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("header name is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Api-Key = abc"),
            Ok(("X-Api-Key".to_string(), "abc".to_string()))
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("=value").is_err());
    }
}
