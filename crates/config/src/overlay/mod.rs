//! File-sourced fallback values for environment variables.
//!
//! Responsibilities:
//! - Scan `*.env` files (by default next to the running executable) into an `EnvOverlay`.
//! - Hold the process-wide overlay behind a one-time initialization guard.
//! - Let application bootstrap install an explicitly loaded overlay before first use.
//!
//! Does NOT handle:
//! - Type conversion or defaults (see `accessor`).
//! - Writing to the process environment. Overlay values stay in memory only.
//!
//! Invariants / Assumptions:
//! - A key defined in the process environment at scan time is never inserted.
//! - Only the process environment is checked before insertion, so later files
//!   (and later lines) override earlier ones for the same key.
//! - Scan failures are silent: a missing directory, unreadable file, or
//!   undeterminable executable path yields fewer (or no) entries, never an error.
//! - The overlay is immutable once built.

mod parse;
mod scan;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::constants::OVERLAY_DISABLED_VAR;
use crate::process;

pub use parse::parse_line;

static GLOBAL: OnceLock<EnvOverlay> = OnceLock::new();

/// A single overlay value and the file it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayEntry {
    /// Raw, trimmed value text.
    pub value: String,
    /// File that supplied the value (the last one to define the key).
    pub file: PathBuf,
}

/// In-memory mapping of variable names to file-sourced raw values.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay {
    entries: HashMap<String, OverlayEntry>,
}

impl EnvOverlay {
    /// An overlay with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan `*.env` files in the directory of the running executable.
    pub fn from_executable_dir() -> Self {
        match scan::executable_dir() {
            Some(dir) => Self::from_dir(&dir),
            None => Self::empty(),
        }
    }

    /// Scan `*.env` files in `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> Self {
        Self::from_files(scan::discover_env_files(dir))
    }

    /// Scan an explicit, ordered list of files.
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut overlay = Self::empty();
        for file in files {
            let file = file.as_ref();
            if let Some(content) = scan::read_env_file(file) {
                let inserted = overlay.ingest(file, &content);
                debug!(file = %file.display(), inserted, "loaded overlay file");
            }
        }
        overlay
    }

    fn ingest(&mut self, file: &Path, content: &str) -> usize {
        let mut inserted = 0;
        for (key, value) in parse::parse_content(content) {
            if process::is_defined(key) {
                trace!(key, file = %file.display(), "process environment shadows overlay key");
                continue;
            }
            self.entries.insert(
                key.to_string(),
                OverlayEntry {
                    value: value.to_string(),
                    file: file.to_path_buf(),
                },
            );
            inserted += 1;
        }
        inserted
    }

    /// Raw value for `key`, if any file defined it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Value and source file for `key`.
    pub fn entry(&self, key: &str) -> Option<&OverlayEntry> {
        self.entries.get(key)
    }

    /// Whether any file defined `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by key.
    pub fn sorted_entries(&self) -> Vec<(&str, &OverlayEntry)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Check if the global scan is disabled via environment variable.
fn overlay_disabled() -> bool {
    matches!(
        std::env::var(OVERLAY_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// The process-wide overlay, scanned from the executable directory on first use.
///
/// Concurrent first callers block until the single scan completes. If
/// `ENVKIT_OVERLAY_DISABLED` is `1` or `true`, the overlay is empty.
pub fn global() -> &'static EnvOverlay {
    GLOBAL.get_or_init(|| {
        if overlay_disabled() {
            debug!("{} is set; skipping overlay scan", OVERLAY_DISABLED_VAR);
            return EnvOverlay::empty();
        }
        EnvOverlay::from_executable_dir()
    })
}

/// Install an explicitly loaded overlay as the process-wide overlay.
///
/// Must run before the first call to [`global`] (directly or through the
/// `get_env_*` functions). Returns the overlay back if one is already in place.
pub fn install(overlay: EnvOverlay) -> Result<(), EnvOverlay> {
    GLOBAL.set(overlay)
}
