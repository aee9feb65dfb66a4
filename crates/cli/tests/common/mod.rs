//! Shared test utilities for envkit integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents the default overlay scan.
//! - Write overlay directories for tests that exercise `--dir`.
//!
//! Invariants / Assumptions:
//! - All integration tests using `envkit_cmd()` are hermetic by default.
//! - Test variables use the `_ENVKIT_CLI_` prefix and are set per command only.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Returns a hermetic `envkit` command for integration testing.
///
/// It ensures:
/// - `ENVKIT_OVERLAY_DISABLED=1` is set so `*.env` files next to the binary are ignored.
/// - `ENVKIT_DIR` and `RUST_LOG` are cleared to ensure no leakage from the host.
pub fn envkit_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envkit");

    // Hermeticity: never scan the target directory
    cmd.env("ENVKIT_OVERLAY_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("ENVKIT_DIR").env_remove("RUST_LOG");

    cmd
}

/// Create a temporary directory holding `(file name, content)` overlay files.
#[allow(dead_code)]
pub fn overlay_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(temp_dir.path().join(name), content).unwrap();
    }
    temp_dir
}
