//! Core domain types.
//!
//! These types describe the namespace model independently of how bindings
//! are stored or where the values come from.
//!
//! # Structure
//!
//! - `kind` - Namespace kinds (`NamespaceKind`) and their bitmask (`NamespaceMask`)

mod kind;

pub use kind::{NamespaceKind, NamespaceMask};
