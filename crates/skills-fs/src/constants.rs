//! Well-known repository paths.

use std::path::Path;

/// Fixed names that agent-skills looks for or writes inside a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoPath {
    /// The `.git` entry marking a repository root (directory, or file for worktrees)
    GitDir,
    /// The `.agent-skills` directory holding synced skills
    SkillsDir,
    /// The optional `config.toml` inside [`RepoPath::SkillsDir`]
    ConfigFile,
    /// The default agent-instructions document
    AgentsFile,
}

impl RepoPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitDir => ".git",
            Self::SkillsDir => ".agent-skills",
            Self::ConfigFile => "config.toml",
            Self::AgentsFile => "AGENTS.md",
        }
    }
}

impl AsRef<Path> for RepoPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}
