//! End-to-end tests: bootstrap a registry from a fake layout, then expand
//! argument vectors against it.

use std::fs;

use arcan_ns_core::{
    DiscoveryConfig, MapEnv, NamespaceKind, NamespaceMask, NamespaceRegistry, NamespaceTable,
    expand_tokens, find_first_existing, find_frameserver, populate_defaults, substitute_one,
};
use tempfile::tempdir;

#[test]
fn bootstrap_then_expand_arguments() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap().to_string();
    let home = format!("{root}/home");
    fs::create_dir_all(format!("{home}/.arcan/resources")).unwrap();
    fs::create_dir_all(format!("{home}/.arcan/appl")).unwrap();
    fs::create_dir_all(format!("{root}/work")).unwrap();

    let config = DiscoveryConfig::rooted_at(&format!("{root}/work"));
    let env = MapEnv::new()
        .with("HOME", home.clone())
        .with("ARCAN_APPLTEMPPATH", "/tmp/appl");

    let mut registry = NamespaceTable::new();
    populate_defaults(&mut registry, &env, &config);

    let res = format!("{home}/.arcan/resources");
    let mut argv = vec![
        "-w".to_string(),
        "font=[ARCAN_FONTPATH]/default.ttf".to_string(),
        "[ARCAN_APPLBASEPATH]:[ARCAN_APPLTEMPPATH]".to_string(),
        "log=[ARCAN_LOGPATH".to_string(),
        "bin=[ARCAN_BINPATH]".to_string(),
    ];
    expand_tokens(&registry, &mut argv);

    assert_eq!(argv[0], "-w");
    assert_eq!(argv[1], format!("font={res}/fonts/default.ttf"));
    assert_eq!(argv[2], format!("{home}/.arcan/appl:/tmp/appl"));
    assert_eq!(argv[3], format!("log={res}/logs"));
    // No frameserver in the layout, so the token survives.
    assert_eq!(argv[4], "bin=[ARCAN_BINPATH]");
}

#[test]
fn documented_substitution_properties() {
    let mut registry = NamespaceTable::new();
    registry.hard_override(Some("E1"), NamespaceMask::APPL_PATH);
    registry.hard_override(Some("E2"), NamespaceMask::RESOURCE_PATH);

    assert_eq!(substitute_one(&registry, "pre[ARCAN_APPLPATH]post"), "preE1post");
    assert_eq!(substitute_one(&registry, "pre[ARCAN_APPLPATH]"), "preE1");
    assert_eq!(substitute_one(&registry, "pre[ARCAN_APPLPATH"), "preE1");
    assert_eq!(substitute_one(&registry, "x[UNKNOWN]y"), "x[UNKNOWN]y");
    assert_eq!(
        substitute_one(&registry, "a[ARCAN_APPLPATH]b[ARCAN_RESOURCEPATH]c"),
        "aE1bE2c"
    );
    assert_eq!(substitute_one(&registry, "no tokens here"), "no tokens here");
}

#[test]
fn override_ordering() {
    let mut registry = NamespaceTable::new();
    registry.hard_override(Some("/hard"), NamespaceMask::LOG_PATH);
    registry.soft_override(Some("/soft"), NamespaceMask::LOG_PATH);
    assert_eq!(registry.get(NamespaceKind::LogPath), Some("/hard"));

    registry.soft_override(Some("/soft"), NamespaceMask::FONT_PATH);
    registry.hard_override(Some("/hard"), NamespaceMask::FONT_PATH);
    assert_eq!(registry.get(NamespaceKind::FontPath), Some("/hard"));
}

#[test]
fn candidate_search_picks_only_existing_directory() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let (a, b, c) = (format!("{root}/a"), format!("{root}/b"), format!("{root}/c"));
    fs::create_dir_all(format!("{b}/resources")).unwrap();

    assert_eq!(
        find_first_existing([a, b.clone(), c], "resources"),
        Some(format!("{b}/resources"))
    );
}

#[test]
fn frameserver_discovery_present_and_absent() {
    let dir = tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let candidate = format!("{root}/arcan_frameserver");
    let config = DiscoveryConfig {
        frameserver_candidates: vec![candidate.clone()],
        ..DiscoveryConfig::default()
    };

    assert_eq!(find_frameserver(&config), None);
    fs::write(&candidate, b"").unwrap();
    assert_eq!(find_frameserver(&config), Some(candidate));
}
