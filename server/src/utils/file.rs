//! Path helpers for config and database locations

use std::path::PathBuf;

/// Expand a user-supplied path to an absolute one.
///
/// `~` and `~/rest` resolve against the home directory; any other relative
/// path (including bare file names like `sieve.db`) resolves against the
/// current directory. Components are kept as written, not canonicalized.
/// An empty or whitespace-only input yields the current directory.
pub fn expand_path(path: &str) -> PathBuf {
    let path = path.trim();
    if path.is_empty() {
        return std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    }

    let expanded = match path {
        "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(path)),
        _ => match (path.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(path),
        },
    };

    if expanded.is_absolute() {
        return expanded;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&expanded))
        .unwrap_or(expanded)
}
