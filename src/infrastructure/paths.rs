//! Filesystem path resolution.

use std::path::PathBuf;

/// Data directory for logs and other persistent files.
///
/// Resolves to `$XDG_DATA_HOME/notekeep` when set, otherwise
/// `$HOME/.local/share/notekeep`. Falls back to a relative `.notekeep`
/// directory when neither variable exists.
#[must_use]
pub fn data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("notekeep");
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".local/share/notekeep");
        }
    }
    PathBuf::from(".notekeep")
}

/// Expands a leading `~/` to the user's home directory.
///
/// Paths without the prefix pass through unchanged, as does `~/...` when
/// `HOME` is unset.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = std::env::var("HOME") {
            if !home.is_empty() {
                return PathBuf::from(home).join(rest);
            }
        }
    }
    PathBuf::from(path)
}
