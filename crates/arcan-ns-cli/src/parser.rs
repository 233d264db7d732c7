//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting arcan resource namespaces.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "arcan-ns")]
#[command(about = "Resolve arcan resource namespaces and expand namespace tokens")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Do not load a `.env` file from the working directory
    #[arg(long = "no-dotenv", global = true)]
    pub no_dotenv: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
