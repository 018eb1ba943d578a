//! Skill configuration
//!
//! [`SkillConfig`] carries every fixed string the tool needs: where the skill
//! lands, how the managed block is marked, which document receives it, and
//! how hooks are installed. It is built once per command from three layers,
//! lowest precedence first:
//!
//! 1. built-in defaults,
//! 2. `.agent-skills/config.toml` at the repository root, when present,
//! 3. explicit overrides from the caller (CLI flags and environment).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use skills_blocks::{ManagedBlock, Markers};
use skills_fs::{RepoPath, io};

use crate::error::{Error, Result};

pub const DEFAULT_SKILL_NAME: &str = "project-management-with-beads";
pub const DEFAULT_SKILL_FILE: &str = "SKILL.md";
pub const DEFAULT_MARKER_TAG: &str = "AGENT-SKILL";
pub const DEFAULT_HOOKS_COMMAND: &str = "pre-commit install";
pub const DEFAULT_HOOK_FILE: &str = ".git/hooks/pre-commit";
pub const DEFAULT_HOOK_MARKER: &str = "pre-commit";

/// How companion commit hooks are detected and installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSettings {
    /// Whitespace-separated command run in the repository root
    pub command: String,
    /// Hook file inspected by [`crate::HookInstaller::is_installed`], relative to the root
    pub hook_file: String,
    /// Substring identifying an installed hook
    pub marker: String,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            command: DEFAULT_HOOKS_COMMAND.to_string(),
            hook_file: DEFAULT_HOOK_FILE.to_string(),
            marker: DEFAULT_HOOK_MARKER.to_string(),
        }
    }
}

/// Resolved configuration for one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillConfig {
    pub skill_name: String,
    pub skills_dir: String,
    pub skill_file: String,
    pub marker_tag: String,
    /// Agent-instructions document, relative to the repository root
    pub agents_file: String,
    pub hooks: HookSettings,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            skill_name: DEFAULT_SKILL_NAME.to_string(),
            skills_dir: RepoPath::SkillsDir.as_str().to_string(),
            skill_file: DEFAULT_SKILL_FILE.to_string(),
            marker_tag: DEFAULT_MARKER_TAG.to_string(),
            agents_file: RepoPath::AgentsFile.as_str().to_string(),
            hooks: HookSettings::default(),
        }
    }
}

/// On-disk overrides read from `.agent-skills/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub agents_file: Option<String>,
    #[serde(default)]
    pub hooks: HookOverrides,
}

/// The `[hooks]` table of [`ConfigFile`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HookOverrides {
    pub command: Option<String>,
    pub hook_file: Option<String>,
    pub marker: Option<String>,
}

impl ConfigFile {
    /// Parse config file content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl SkillConfig {
    /// Location of the optional config file for a repository.
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(RepoPath::SkillsDir).join(RepoPath::ConfigFile)
    }

    /// Defaults layered with the repository's config file, if it has one.
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::config_path(root);
        let content = io::read_text_or_empty(&path)?;
        if content.is_empty() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let file = ConfigFile::parse(&content, &path)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(Self::default().with_file(file))
    }

    /// Apply the overrides from a parsed config file.
    pub fn with_file(mut self, file: ConfigFile) -> Self {
        if let Some(agents_file) = file.agents_file {
            self.agents_file = agents_file;
        }
        if let Some(command) = file.hooks.command {
            self.hooks.command = command;
        }
        if let Some(hook_file) = file.hooks.hook_file {
            self.hooks.hook_file = hook_file;
        }
        if let Some(marker) = file.hooks.marker {
            self.hooks.marker = marker;
        }
        self
    }

    pub fn with_agents_file(mut self, agents_file: Option<String>) -> Self {
        if let Some(agents_file) = agents_file {
            self.agents_file = agents_file;
        }
        self
    }

    pub fn with_hooks_command(mut self, command: Option<String>) -> Self {
        if let Some(command) = command {
            self.hooks.command = command;
        }
        self
    }

    /// Skill location relative to the root, always with forward slashes.
    pub fn skill_rel_path(&self) -> String {
        format!("{}/{}/{}", self.skills_dir, self.skill_name, self.skill_file)
    }

    /// Absolute skill location under `root`.
    pub fn skill_path(&self, root: &Path) -> PathBuf {
        root.join(&self.skills_dir)
            .join(&self.skill_name)
            .join(&self.skill_file)
    }

    /// Absolute agent-instructions document under `root`.
    pub fn agents_path(&self, root: &Path) -> PathBuf {
        root.join(&self.agents_file)
    }

    pub fn markers(&self) -> Markers {
        Markers::new(&self.marker_tag, &self.skill_name)
    }

    pub fn pointer_line(&self) -> String {
        format!("Use skill at: {}", self.skill_rel_path())
    }

    /// The block that `inject` maintains.
    pub fn managed_block(&self) -> ManagedBlock {
        self.markers().block(self.pointer_line())
    }
}
