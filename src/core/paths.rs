//! History file location
//!
//! Resolution order: explicit --history-file flag, LEXI_HISTORY_FILE env var,
//! then ~/.lexi_history.json.

use std::env;
use std::path::{Path, PathBuf};

/// Env var overriding the default history location
pub const HISTORY_FILE_ENV: &str = "LEXI_HISTORY_FILE";

/// Default history file name under the home directory
pub const HISTORY_FILE_NAME: &str = ".lexi_history.json";

/// Resolve the history file path
pub fn history_file(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Some(path) = env::var_os(HISTORY_FILE_ENV) {
        return PathBuf::from(path);
    }

    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HISTORY_FILE_NAME)
}

/// Home directory without pulling in a platform crate
fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        let path = history_file(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_default_uses_file_name() {
        // Only check the file name to stay independent of the env
        if env::var_os(HISTORY_FILE_ENV).is_none() {
            let path = history_file(None);
            assert!(path.ends_with(HISTORY_FILE_NAME) || path.to_string_lossy().ends_with(".json"));
        }
    }
}
