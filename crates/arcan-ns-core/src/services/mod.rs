//! Core services.
//!
//! Services operate on an explicitly passed registry; none of them keep
//! state of their own.
//!
//! - `bootstrap` - one-shot population of namespace defaults
//! - `tokens` - `[NAME]` token substitution in argument strings

pub mod bootstrap;
pub mod tokens;

pub use bootstrap::{
    APPL_SUBDIR, BootstrapReport, RESOURCES_SUBDIR, SAVESTATES_SUBDIR, THEMES_SUBDIR,
    populate_defaults, populate_defaults_from_process,
};
pub use tokens::{
    MAX_SUBSTITUTIONS, TokenError, expand_tokens, expand_tokens_owned, substitute_one,
    try_substitute,
};
