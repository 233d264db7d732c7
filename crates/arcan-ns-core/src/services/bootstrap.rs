//! First-run namespace population.
//!
//! [`populate_defaults`] fills an empty registry from the environment and from
//! whatever installation layout it can find on disk. It mimics the layout
//! rules of older releases; more controlled deployments should bind the
//! namespaces themselves instead of calling it.
//!
//! # Order
//!
//! 1. Environment variables, as hard overrides (for all kinds, set or not)
//! 2. Frameserver binary and hijack library, as soft overrides
//! 3. Shared resources, with `logs` and `fonts` derived from them
//! 4. Appl base and store (`appl`, falling back to `themes`)
//! 5. Persistent state, defaulting to `savestates` under the resources
//!
//! Hard overrides run first so environment intent always wins over discovery.
//! Every step is best-effort; a miss leaves the kind unbound.

use crate::domain::{NamespaceKind, NamespaceMask};
use crate::paths::{DiscoveryConfig, find_frameserver, find_hijack_libdir, find_shared_dir};
use crate::ports::{EnvSource, NamespaceRegistry, ProcessEnv};

/// Subdirectory probed for shared resources.
pub const RESOURCES_SUBDIR: &str = "resources";
/// Subdirectory probed for appls.
pub const APPL_SUBDIR: &str = "appl";
/// Legacy name for [`APPL_SUBDIR`].
pub const THEMES_SUBDIR: &str = "themes";
/// Default persistent-state directory below the resources.
pub const SAVESTATES_SUBDIR: &str = "savestates";

/// What discovery found during [`populate_defaults`].
///
/// Informational only; the registry is the real output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Kinds whose environment variable was set (possibly empty).
    pub from_env: NamespaceMask,
    /// Frameserver discovery result.
    pub frameserver: Option<String>,
    /// Hijack library discovery result.
    pub hijack_libdir: Option<String>,
    /// Resource root used for derived directories, if any.
    pub resources: Option<String>,
    /// Appl directory, if any.
    pub appl: Option<String>,
    /// Persistent state directory set by step 5, if it ran and succeeded.
    pub savestates: Option<String>,
}

/// Populate `registry` from `env` and the filesystem layout in `config`.
pub fn populate_defaults<R>(
    registry: &mut R,
    env: &dyn EnvSource,
    config: &DiscoveryConfig,
) -> BootstrapReport
where
    R: NamespaceRegistry + ?Sized,
{
    let mut report = BootstrapReport::default();

    // 1. Environment as hard overrides. The call is made for every kind; the
    // registry decides what an absent value means.
    for kind in NamespaceKind::ALL {
        let value = env.var(kind.var_name());
        if value.is_some() {
            report.from_env |= kind.mask();
        }
        registry.hard_override(value.as_deref(), kind.mask());
    }

    // 2. Frameserver and hijack library
    report.frameserver = find_frameserver(config);
    report.hijack_libdir = find_hijack_libdir(env, config);
    registry.soft_override(report.frameserver.as_deref(), NamespaceMask::BIN_PATH);
    registry.soft_override(report.hijack_libdir.as_deref(), NamespaceMask::LIB_PATH);

    // 3. Shared resources and derived directories
    report.resources = find_shared_dir(env, config, RESOURCES_SUBDIR)
        .or_else(|| registry.expand("", NamespaceMask::RESOURCE_PATH));

    if let Some(resources) = report.resources.as_deref() {
        let logs = format!("{resources}/logs");
        let fonts = format!("{resources}/fonts");

        registry.soft_override(Some(resources), NamespaceMask::RESOURCE_PATH);
        registry.soft_override(Some(logs.as_str()), NamespaceMask::LOG_PATH);
        // Legacy: the application state slot shares the resource root.
        registry.soft_override(Some(resources), NamespaceMask::STATE_PATH);
        registry.soft_override(Some(fonts.as_str()), NamespaceMask::FONT_PATH);
    }

    // 4. Appl base and store
    report.appl = find_shared_dir(env, config, APPL_SUBDIR)
        .or_else(|| find_shared_dir(env, config, THEMES_SUBDIR));

    if let Some(appl) = report.appl.as_deref() {
        registry.soft_override(Some(appl), NamespaceMask::APPL_BASE_PATH);
        registry.soft_override(Some(appl), NamespaceMask::APPL_STORE_PATH);
    }

    // 5. Persistent state
    if registry.expand("", NamespaceMask::STATE_BASE_PATH).is_none() {
        report.savestates = registry.expand(SAVESTATES_SUBDIR, NamespaceMask::RESOURCE_PATH);
        if let Some(savestates) = report.savestates.as_deref() {
            registry.hard_override(Some(savestates), NamespaceMask::STATE_BASE_PATH);
        }
    }

    tracing::debug!(?report, "namespace defaults populated");
    report
}

/// [`populate_defaults`] against the process environment and stock layout.
pub fn populate_defaults_from_process<R>(registry: &mut R) -> BootstrapReport
where
    R: NamespaceRegistry + ?Sized,
{
    populate_defaults(registry, &ProcessEnv, &DiscoveryConfig::default())
}
