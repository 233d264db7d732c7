//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - A pure `render` function producing the output, so it can be tested
//!   without capturing stdout

pub mod expand;
pub mod paths;
