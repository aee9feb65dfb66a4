//! Discovery of overlay files on disk.
//!
//! Responsibilities:
//! - Locate the directory holding the running executable.
//! - Enumerate files matching the `*.env` glob in a directory, in name order.
//! - Read a file's content for parsing.
//!
//! Invariants:
//! - Every failure degrades to "nothing found" and is logged at debug level only.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::ENV_FILE_SUFFIX;

/// Directory containing the running executable, if it can be determined.
pub(crate) fn executable_dir() -> Option<PathBuf> {
    let exe = match std::env::current_exe() {
        Ok(path) => path,
        Err(error) => {
            debug!(%error, "unable to determine executable path; overlay disabled");
            return None;
        }
    };
    exe.parent().map(Path::to_path_buf)
}

/// Whether a file name matches the `*.env` pattern (a bare `.env` included).
pub(crate) fn is_env_file_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(ENV_FILE_SUFFIX.as_bytes())
}

/// All non-directory entries of `dir` matching `*.env`, sorted by path.
pub(crate) fn discover_env_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(dir = %dir.display(), %error, "unable to enumerate overlay directory");
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| is_env_file_name(&entry.file_name()))
        .filter(|entry| entry.file_type().is_ok_and(|kind| !kind.is_dir()))
        .map(|entry| entry.path())
        .collect();
    files.sort();

    debug!(dir = %dir.display(), count = files.len(), "discovered overlay files");
    files
}

/// Read an overlay file, replacing invalid UTF-8. Unreadable files yield `None`.
pub(crate) fn read_env_file(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(error) => {
            debug!(file = %path.display(), %error, "skipping unreadable overlay file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_env_file_name() {
        assert!(is_env_file_name(OsStr::new("app.env")));
        assert!(is_env_file_name(OsStr::new(".env")));
        assert!(is_env_file_name(OsStr::new("a.b.env")));
        assert!(!is_env_file_name(OsStr::new("app.env.bak")));
        assert!(!is_env_file_name(OsStr::new("env")));
        assert!(!is_env_file_name(OsStr::new("app.ENV")));
    }

    #[test]
    fn test_discover_env_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.env"), "").unwrap();
        fs::write(temp_dir.path().join("a.env"), "").unwrap();
        fs::write(temp_dir.path().join(".env"), "").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(temp_dir.path().join("nested.env")).unwrap();

        let names: Vec<String> = discover_env_files(temp_dir.path())
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec![".env", "a.env", "b.env"]);
    }

    #[test]
    fn test_discover_env_files_missing_dir_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");
        assert!(discover_env_files(&missing).is_empty());
    }

    #[test]
    fn test_read_env_file_lossy_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bytes.env");
        fs::write(&path, b"A=\xffok\n").unwrap();

        let content = read_env_file(&path).unwrap();
        assert!(content.starts_with("A="));
        assert!(content.ends_with("ok\n"));

        assert!(read_env_file(&temp_dir.path().join("gone.env")).is_none());
    }

    #[test]
    fn test_executable_dir_is_a_directory() {
        let dir = executable_dir().expect("test binary has a parent directory");
        assert!(dir.is_dir());
    }
}
