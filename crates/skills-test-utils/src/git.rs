//! Git repository fixtures.
//!
//! Root discovery only looks for a `.git` entry, so most tests can use the
//! fake fixture. Use the real one when a test must match what `git init`
//! actually produces.

use std::fs;
use std::path::Path;

/// Creates a bare `.git` directory with a `hooks/` subdirectory, without
/// initialising a real repository.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git/hooks"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git/hooks: {e}"));
    fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n")
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to write HEAD: {e}"));
}

/// Initialises a real git repository using `git2`.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}
