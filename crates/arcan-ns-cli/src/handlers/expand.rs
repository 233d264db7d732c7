//! Expand command handler.
//!
//! Runs token substitution over the given arguments, the same way an
//! argument vector is rewritten before it is dispatched onward.

use std::io::{self, Write};

use arcan_ns_core::expand_tokens_owned;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Expand every argument against the bootstrapped registry.
pub fn render(ctx: &CliContext, args: Vec<String>) -> Vec<String> {
    expand_tokens_owned(&ctx.registry, args)
}

/// Execute the expand command.
pub fn execute(ctx: &CliContext, args: Vec<String>) -> Result<(), CliError> {
    if args.is_empty() {
        return Err(CliError::Arguments(
            "expand needs at least one argument".to_string(),
        ));
    }

    let mut stdout = io::stdout().lock();
    for arg in render(ctx, args) {
        writeln!(stdout, "{arg}")?;
    }
    Ok(())
}
