//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces the core expects from its surroundings.
//! They contain no storage or process details and use only domain types.
//!
//! # Design Rules
//!
//! - The registry is always passed explicitly, never reached through globals
//! - Environment access goes through `EnvSource` so bootstrap is testable
//! - Diagnostics are emitted with `tracing`, not through a port

pub mod env;
pub mod registry;

pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use registry::NamespaceRegistry;
