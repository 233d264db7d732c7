//! Namespace kinds and the bitmask used to address them.
//!
//! Every logical resource namespace has a fixed position in [`NamespaceKind::ALL`].
//! That position doubles as its bit in [`NamespaceMask`] and as the lookup key
//! for its canonical environment variable name.
//!
//! # Invariant
//!
//! `NamespaceKind::ALL[i].index() == i` and
//! `NamespaceKind::ALL[i].mask().bits() == 1 << i` for every kind.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Logical role a resolved directory can play.
///
/// The declaration order is significant: it defines the bit position of each
/// kind and must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NamespaceKind {
    /// Root of the currently running appl.
    #[serde(rename = "ARCAN_APPLPATH")]
    ApplPath,
    /// Shared resources (images, sounds, fonts) available to every appl.
    #[serde(rename = "ARCAN_RESOURCEPATH")]
    ResourcePath,
    /// Scratch space for the running appl.
    #[serde(rename = "ARCAN_APPLTEMPPATH")]
    ApplTempPath,
    /// Deprecated. Still has a slot and a variable name, but registries ignore it.
    #[serde(rename = "ARCAN_STATEPATH")]
    StatePath,
    /// Directory that appls are loaded from.
    #[serde(rename = "ARCAN_APPLBASEPATH")]
    ApplBasePath,
    /// Directory that appls are stored into.
    #[serde(rename = "ARCAN_APPLSTOREPATH")]
    ApplStorePath,
    /// Persistent appl state (savestates and similar).
    #[serde(rename = "ARCAN_STATEBASEPATH")]
    StateBasePath,
    /// System fonts.
    #[serde(rename = "ARCAN_FONTPATH")]
    FontPath,
    /// Frameserver binary.
    #[serde(rename = "ARCAN_BINPATH")]
    BinPath,
    /// Directory holding the hijack library.
    #[serde(rename = "ARCAN_LIBPATH")]
    LibPath,
    /// Debug and log output.
    #[serde(rename = "ARCAN_LOGPATH")]
    LogPath,
}

/// Canonical variable names, indexed by [`NamespaceKind::index`].
const VAR_NAMES: [&str; NamespaceKind::COUNT] = [
    "ARCAN_APPLPATH",
    "ARCAN_RESOURCEPATH",
    "ARCAN_APPLTEMPPATH",
    "ARCAN_STATEPATH",
    "ARCAN_APPLBASEPATH",
    "ARCAN_APPLSTOREPATH",
    "ARCAN_STATEBASEPATH",
    "ARCAN_FONTPATH",
    "ARCAN_BINPATH",
    "ARCAN_LIBPATH",
    "ARCAN_LOGPATH",
];

impl NamespaceKind {
    /// Number of namespace kinds.
    pub const COUNT: usize = 11;

    /// All kinds in bit order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ApplPath,
        Self::ResourcePath,
        Self::ApplTempPath,
        Self::StatePath,
        Self::ApplBasePath,
        Self::ApplStorePath,
        Self::StateBasePath,
        Self::FontPath,
        Self::BinPath,
        Self::LibPath,
        Self::LogPath,
    ];

    /// Position of this kind in [`Self::ALL`], which is also its bit index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Kind stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical environment variable name, also used as the token name.
    pub const fn var_name(self) -> &'static str {
        VAR_NAMES[self.index()]
    }

    /// Look up a kind by its exact (case-sensitive) variable name.
    pub fn from_var_name(name: &str) -> Option<Self> {
        VAR_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    /// Single-bit mask addressing this kind.
    pub const fn mask(self) -> NamespaceMask {
        NamespaceMask::from_bits_retain(1 << self.index())
    }

    /// Whether registries should treat writes to this kind as no-ops.
    pub const fn is_deprecated(self) -> bool {
        matches!(self, Self::StatePath)
    }
}

impl fmt::Display for NamespaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.var_name())
    }
}

bitflags! {
    /// Set of namespace kinds, one bit per kind (`1 << index`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct NamespaceMask: u32 {
        const APPL_PATH       = 1 << 0;
        const RESOURCE_PATH   = 1 << 1;
        const APPL_TEMP_PATH  = 1 << 2;
        const STATE_PATH      = 1 << 3;
        const APPL_BASE_PATH  = 1 << 4;
        const APPL_STORE_PATH = 1 << 5;
        const STATE_BASE_PATH = 1 << 6;
        const FONT_PATH       = 1 << 7;
        const BIN_PATH        = 1 << 8;
        const LIB_PATH        = 1 << 9;
        const LOG_PATH        = 1 << 10;
    }
}

impl NamespaceMask {
    /// Kinds contained in this mask, in bit order.
    pub fn kinds(self) -> impl Iterator<Item = NamespaceKind> {
        NamespaceKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(kind.mask()))
    }
}

impl From<NamespaceKind> for NamespaceMask {
    fn from(kind: NamespaceKind) -> Self {
        kind.mask()
    }
}

impl Default for NamespaceMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for NamespaceMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NamespaceMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}
