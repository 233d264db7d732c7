//! Namespace registry port.
//!
//! The registry owns the actual kind -> directory bindings. The core only
//! consumes it through this trait: bootstrap writes through the two override
//! operations, token substitution reads through [`NamespaceRegistry::expand`].
//!
//! # Override policy
//!
//! - `hard_override` always wins. It is used for explicit environment settings
//!   and accepts an empty value as a real binding.
//! - `soft_override` only fills kinds that are still unbound. It is used for
//!   discovered fallbacks and silently ignores an absent value.
//!
//! A hard override followed by a soft override keeps the hard value; a soft
//! override followed by a hard override is replaced.

use crate::domain::NamespaceMask;

/// Storage and query primitives for namespace bindings.
pub trait NamespaceRegistry {
    /// Resolve `mask` to a path, optionally with `suffix` appended.
    ///
    /// The first bound kind of `mask` (in bit order) is used. An empty
    /// `suffix` yields the bound path itself, otherwise `path/suffix`.
    /// Returns `None` when no kind in `mask` is bound.
    fn expand(&self, suffix: &str, mask: NamespaceMask) -> Option<String>;

    /// Unconditionally (re)bind every kind in `mask`.
    ///
    /// `Some("")` is a valid binding. `None` clears the binding.
    fn hard_override(&mut self, value: Option<&str>, mask: NamespaceMask);

    /// Bind every currently unbound kind in `mask`; no-op for `None`.
    fn soft_override(&mut self, value: Option<&str>, mask: NamespaceMask);
}
