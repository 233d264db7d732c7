//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the namespace registry is created
//! and populated for the CLI adapter. Command handlers receive the populated
//! `CliContext` and never touch the environment or the filesystem layout
//! themselves.

use arcan_ns_core::{
    BootstrapReport, DiscoveryConfig, EnvSource, NamespaceTable, ProcessEnv, populate_defaults,
};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Candidate locations for layout discovery.
    pub discovery: DiscoveryConfig,
}

impl CliConfig {
    /// Create config with the stock layout.
    pub fn with_defaults() -> Self {
        Self::default()
    }
}

/// Fully populated context for CLI commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Namespace bindings after bootstrap.
    pub registry: NamespaceTable,
    /// What discovery found while populating the registry.
    pub report: BootstrapReport,
}

/// Populate a fresh registry from the process environment.
pub fn bootstrap(config: &CliConfig) -> CliContext {
    bootstrap_with_env(config, &ProcessEnv)
}

/// Populate a fresh registry from an explicit environment.
pub fn bootstrap_with_env(config: &CliConfig, env: &dyn EnvSource) -> CliContext {
    let mut registry = NamespaceTable::new();
    let report = populate_defaults(&mut registry, env, &config.discovery);
    tracing::debug!(
        from_env = report.from_env.bits(),
        resources = ?report.resources,
        appl = ?report.appl,
        "bootstrap complete"
    );
    CliContext { registry, report }
}
