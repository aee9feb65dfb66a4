//! Tests for the typed accessors.
//!
//! Invariants:
//! - Tests that touch the process environment are `#[serial]` and hold `env_lock()`.
//! - Variables are scoped with `temp_env::with_vars`, so nothing leaks between tests.
//! - Overlays are built from temporary directories, never from the global scan.

use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

use crate::overlay::EnvOverlay;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Build an overlay from a single `test.env` file with the given content.
///
/// The directory is returned so callers can keep it alive while inspecting paths.
pub fn overlay_from(content: &str) -> (TempDir, EnvOverlay) {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.env"), content).unwrap();
    let overlay = EnvOverlay::from_dir(temp_dir.path());
    (temp_dir, overlay)
}
