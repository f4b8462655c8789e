//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, bootstraps the
//! settings panel and dispatches to a handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use boardkit_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Show { tab } => handlers::show::execute(&ctx, tab.as_deref()).await?,
        Commands::Board { command } => handlers::board::execute(&ctx, command).await?,
        Commands::Credentials { command } => handlers::credentials::execute(&ctx, command).await?,
        Commands::Integrations { command } => {
            handlers::integrations::execute(&ctx, command).await?;
        }
        Commands::OauthReturn { query } => handlers::oauth::execute(&ctx, &query).await?,
    }

    ctx.panel.close().await;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
