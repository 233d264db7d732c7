//! In-memory namespace registry.
//!
//! [`NamespaceTable`] is the default [`NamespaceRegistry`]: one optional
//! binding per kind, nothing else. Writes to the deprecated `StatePath` kind
//! are accepted and dropped.

use std::fmt;

use serde::Serialize;

use crate::domain::{NamespaceKind, NamespaceMask};
use crate::ports::NamespaceRegistry;

/// Fixed-size kind -> directory table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    slots: [Option<String>; NamespaceKind::COUNT],
}

impl NamespaceTable {
    /// Create a table with every kind unbound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current binding of `kind`.
    pub fn get(&self, kind: NamespaceKind) -> Option<&str> {
        self.slots[kind.index()].as_deref()
    }

    /// Whether `kind` has a binding.
    pub fn is_bound(&self, kind: NamespaceKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// All kinds with their bindings, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = (NamespaceKind, Option<&str>)> {
        NamespaceKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
    }

    /// Owned copy of the current bindings.
    pub fn snapshot(&self) -> ResolvedNamespaces {
        ResolvedNamespaces {
            entries: self
                .iter()
                .map(|(kind, value)| NamespaceEntry {
                    kind,
                    path: value.map(str::to_owned),
                })
                .collect(),
        }
    }

    fn bind(&mut self, kind: NamespaceKind, value: Option<&str>) {
        if kind.is_deprecated() {
            tracing::trace!(%kind, "ignoring write to deprecated namespace");
            return;
        }
        self.slots[kind.index()] = value.map(str::to_owned);
    }
}

impl NamespaceRegistry for NamespaceTable {
    fn expand(&self, suffix: &str, mask: NamespaceMask) -> Option<String> {
        let base = mask.kinds().find_map(|kind| self.get(kind))?;
        if suffix.is_empty() {
            Some(base.to_owned())
        } else {
            Some(format!("{base}/{suffix}"))
        }
    }

    fn hard_override(&mut self, value: Option<&str>, mask: NamespaceMask) {
        for kind in mask.kinds() {
            tracing::debug!(%kind, value = ?value, "hard override");
            self.bind(kind, value);
        }
    }

    fn soft_override(&mut self, value: Option<&str>, mask: NamespaceMask) {
        let Some(value) = value else {
            return;
        };
        for kind in mask.kinds() {
            if self.is_bound(kind) {
                continue;
            }
            tracing::debug!(%kind, value, "soft override");
            self.bind(kind, Some(value));
        }
    }
}

/// One row of a [`ResolvedNamespaces`] listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceEntry {
    /// The namespace kind.
    pub kind: NamespaceKind,
    /// Bound directory, `None` when unbound.
    pub path: Option<String>,
}

/// All namespace bindings captured at one point in time.
///
/// Displays as `NAME = value` lines, which is what `arcan-ns paths` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNamespaces {
    /// One entry per kind, in bit order.
    pub entries: Vec<NamespaceEntry>,
}

impl ResolvedNamespaces {
    /// Binding of `kind` in this snapshot.
    pub fn get(&self, kind: NamespaceKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .and_then(|entry| entry.path.as_deref())
    }
}

impl fmt::Display for ResolvedNamespaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match &entry.path {
                Some(path) => write!(f, "{} = {path}", entry.kind)?,
                None => write!(f, "{} = <unset>", entry.kind)?,
            }
        }
        Ok(())
    }
}
