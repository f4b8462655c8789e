//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use boardkit_http::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line interface for managing a board's settings.
///
/// Global options select the board and the API to talk to; subcommands
/// map onto the tabs of the settings panel.
#[derive(Parser)]
#[command(name = "boardkit")]
#[command(about = "Manage board credentials, integrations and settings")]
#[command(version)]
pub struct Cli {
    /// Board to operate on
    #[arg(short = 'b', long = "board", global = true, env = "BOARDKIT_BOARD_ID")]
    pub board: Option<String>,

    /// Base URL of the board API
    #[arg(
        long = "api-url",
        global = true,
        env = "BOARDKIT_API_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub api_url: String,

    /// Bearer token sent with every request
    #[arg(long = "token", global = true, env = "BOARDKIT_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long = "timeout",
        global = true,
        env = "BOARDKIT_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,

    /// Print machine-readable JSON instead of text
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
