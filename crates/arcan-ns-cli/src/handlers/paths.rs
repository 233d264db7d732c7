//! Paths command handler.
//!
//! Displays every namespace binding for diagnostics and debugging.

use std::io::{self, Write};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Render the namespace table as `NAME = value` lines or pretty JSON.
pub fn render(ctx: &CliContext, json: bool) -> Result<String, CliError> {
    let snapshot = ctx.registry.snapshot();
    if json {
        Ok(serde_json::to_string_pretty(&snapshot)?)
    } else {
        Ok(snapshot.to_string())
    }
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<(), CliError> {
    let output = render(ctx, json)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}
