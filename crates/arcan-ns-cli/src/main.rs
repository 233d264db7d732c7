//! CLI entry point - the composition root.
//!
//! Loads `.env`, initialises logging, bootstraps the namespace registry once
//! and dispatches to the command handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use arcan_ns_cli::{Cli, CliConfig, Commands, bootstrap, error::exit_code_for, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap runs exactly once, before any namespace is resolved
    let ctx = bootstrap(&CliConfig::with_defaults());

    match command {
        Commands::Paths { json } => handlers::paths::execute(&ctx, json)?,
        Commands::Expand { args } => handlers::expand::execute(&ctx, args)?,
    }
    Ok(())
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    // Load environment variables; a missing .env file is fine
    if !cli.no_dotenv {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("ignoring .env: {e}"),
        }
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code_for(&e));
    }
}
