//! Argument parsing and bootstrap through the public API.

use boardkit_cli::{Cli, CliConfig, CliError, Commands, CredentialsCommand, bootstrap};
use boardkit_gui::GuiError;
use clap::Parser;

#[test]
fn test_oauth_return_takes_raw_query() {
    let cli = Cli::parse_from(["boardkit", "-b", "b1", "oauth-return", "?github=connected"]);
    match cli.command {
        Some(Commands::OauthReturn { query }) => assert_eq!(query, "?github=connected"),
        _ => panic!("expected oauth-return"),
    }
}

#[test]
fn test_credentials_remove_takes_id() {
    let cli = Cli::parse_from(["boardkit", "credentials", "remove", "c1"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Credentials {
            command: CredentialsCommand::Remove { ref id }
        }) if id == "c1"
    ));
}

#[tokio::test]
async fn test_bootstrapped_panel_starts_closed() {
    let cli = Cli::parse_from(["boardkit", "-b", "b1", "--token", "t", "show"]);
    let ctx = bootstrap(CliConfig::from_cli(&cli).unwrap()).unwrap();

    assert_eq!(ctx.panel.board_id(), "b1");
    assert!(!ctx.panel.is_open().await);

    let err = CliError::from(ctx.panel.remove_credential("c1").await.unwrap_err());
    assert_eq!(err.exit_code(), 75);
}

#[test]
fn test_cancelled_operations_are_internal_errors() {
    assert_eq!(CliError::from(GuiError::Cancelled).exit_code(), 70);
}
