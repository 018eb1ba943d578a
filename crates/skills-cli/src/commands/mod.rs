//! Command implementations for skills-cli

pub mod hooks;
pub mod inject;
pub mod status;
pub mod sync;

use std::path::{Path, PathBuf};

use skills_core::SkillConfig;
use skills_fs::resolve_repo_root;

use crate::error::Result;

pub use inject::run_inject;
pub use status::run_status;
pub use sync::run_sync;

/// Resolve the repository root from `--repo` or the current directory.
///
/// The start path is made absolute first so the upward walk sees every
/// ancestor. A start outside any repository is used as-is.
pub fn resolve_root(cwd: &Path, repo: Option<&Path>) -> PathBuf {
    let start = match repo {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    let start = dunce::canonicalize(&start).unwrap_or(start);
    resolve_repo_root(&start)
}

/// Load the repository config and apply command-line overrides on top.
pub fn load_config(
    root: &Path,
    agents_file: Option<String>,
    hooks_command: Option<String>,
) -> Result<SkillConfig> {
    Ok(SkillConfig::load(root)?
        .with_agents_file(agents_file)
        .with_hooks_command(hooks_command))
}
