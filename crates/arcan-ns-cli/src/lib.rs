//! Command-line front end for `arcan-ns-core`.
//!
//! Provides the `arcan-ns` binary's parser, composition root and handlers.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies only used by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with_env};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
