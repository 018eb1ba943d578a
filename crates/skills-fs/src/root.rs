//! Repository root discovery

use std::path::{Path, PathBuf};

use crate::RepoPath;

/// Find the repository root for `start`.
///
/// Walks `start` and then each of its ancestors, returning the first one that
/// has a `.git` entry as a direct child. A `.git` file counts as well as a
/// directory, so linked worktrees and submodules resolve to their own root.
///
/// When no ancestor qualifies, `start` is returned unchanged. This never
/// fails: callers always get a usable directory to work in.
pub fn resolve_repo_root(start: &Path) -> PathBuf {
    for candidate in start.ancestors() {
        if candidate.join(RepoPath::GitDir).exists() {
            tracing::debug!(root = %candidate.display(), "Found repository root");
            return candidate.to_path_buf();
        }
    }

    tracing::debug!(
        start = %start.display(),
        "No repository marker found, using start path"
    );
    start.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_start_is_root() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        assert_eq!(resolve_repo_root(temp.path()), temp.path());
    }

    #[test]
    fn test_nested_start_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let nested = temp.path().join("src/deep/er");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(resolve_repo_root(&nested), temp.path());
    }

    #[test]
    fn test_no_marker_returns_start() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("plain");
        fs::create_dir_all(&nested).unwrap();

        // Some CI sandboxes live inside a checkout; only assert when they don't.
        if !temp.path().ancestors().any(|p| p.join(".git").exists()) {
            assert_eq!(resolve_repo_root(&nested), nested);
        }
    }
}
