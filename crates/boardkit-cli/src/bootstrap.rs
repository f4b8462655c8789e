//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI: the reqwest-backed board API client is built here and
//! injected into the settings panel facade.

use std::sync::Arc;
use std::time::Duration;

use boardkit_gui::{PanelDeps, SettingsPanel};
use boardkit_http::{BoardApiConfig, DefaultBoardApiClient};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Clone)]
pub struct CliConfig {
    pub board_id: String,
    pub api: BoardApiConfig,
    /// Print JSON instead of text
    pub json: bool,
}

impl CliConfig {
    /// Build the configuration from parsed arguments.
    ///
    /// Environment variables (and `.env`) are already folded into `cli`
    /// by clap.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let board_id = cli
            .board
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                CliError::Arguments(
                    "no board selected; pass --board or set BOARDKIT_BOARD_ID".to_string(),
                )
            })?
            .to_string();
        if cli.timeout_secs == 0 {
            return Err(CliError::Config("timeout must be at least 1 second".to_string()));
        }

        let api = BoardApiConfig::new()
            .with_base_url(cli.api_url.trim())
            .with_timeout(Duration::from_secs(cli.timeout_secs))
            .with_user_agent(concat!("boardkit-cli/", env!("CARGO_PKG_VERSION")))
            .with_optional_token(cli.token.clone().filter(|t| !t.trim().is_empty()));

        Ok(Self {
            board_id,
            api,
            json: cli.json,
        })
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// Settings panel of the selected board.
    pub panel: SettingsPanel,
    pub json: bool,
}

/// Wire the API client into a settings panel for the configured board.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    debug!(board_id = %config.board_id, base_url = %config.api.base_url(), "Bootstrapping CLI");
    let client = DefaultBoardApiClient::new(&config.api)?;
    let deps = PanelDeps::new(Arc::new(client));
    Ok(CliContext {
        panel: SettingsPanel::new(deps, config.board_id),
        json: config.json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_requires_board() {
        let cli = Cli::parse_from(["boardkit", "--board", "  ", "board", "show"]);
        let err = CliConfig::from_cli(&cli).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_config_from_flags() {
        let cli = Cli::parse_from([
            "boardkit",
            "-b",
            "b1",
            "--api-url",
            "https://boards.example.com/api",
            "--timeout",
            "5",
            "board",
            "show",
        ]);
        let config = CliConfig::from_cli(&cli).unwrap();
        assert_eq!(config.board_id, "b1");
        assert_eq!(config.api.base_url(), "https://boards.example.com/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_bootstrap_rejects_unusable_base_url() {
        let cli = Cli::parse_from(["boardkit", "-b", "b1", "--api-url", "mailto:x@y", "board", "show"]);
        let config = CliConfig::from_cli(&cli).unwrap();
        let err = bootstrap(config).err().unwrap();
        assert_eq!(err.exit_code(), 78);
    }
}
