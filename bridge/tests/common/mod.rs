//! Shared helpers for the bridge integration tests: builds the fixture mod
//! cdylibs once per test process and resolves their paths in the shared
//! target directory.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Once;

static BUILD_FIXTURES: Once = Once::new();

pub fn ensure_fixtures() {
    BUILD_FIXTURES.call_once(|| {
        let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
        let mut args = vec!["build", "-p", "mod_probe", "-p", "mod_partial"];
        if !cfg!(debug_assertions) {
            args.push("--release");
        }
        let status = Command::new(cargo)
            .args(&args)
            .current_dir(workspace_root())
            .status()
            .expect("failed to spawn cargo to build the fixture mods");
        assert!(status.success(), "building the fixture mods failed");
    });
}

pub fn fixture_path(name: &str) -> PathBuf {
    let target = std::env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| workspace_root().join("target"));
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    target.join(profile).join(fixture_filename(name))
}

fn fixture_filename(name: &str) -> String {
    use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};

    format!("{}{}{}", DLL_PREFIX, name, DLL_SUFFIX)
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..")
}
