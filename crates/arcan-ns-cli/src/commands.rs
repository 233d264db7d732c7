//! Subcommands for the CLI tool.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every namespace after bootstrapping from the environment and disk
    Paths {
        /// Print JSON instead of `NAME = value` lines
        #[arg(long)]
        json: bool,
    },

    /// Expand `[NAME]` namespace tokens in the given arguments
    Expand {
        /// Arguments to expand, printed one per line
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },
}
