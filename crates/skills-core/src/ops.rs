//! Sync, inject and status operations
//!
//! Each operation performs at most one read-transform-write cycle per target
//! file. Writes go through [`skills_fs::io::write_atomic`], so a failure
//! leaves the previous file content intact.

use std::fmt;
use std::path::{Path, PathBuf};

use skills_blocks::editor;
use skills_fs::{checksum, io};

use crate::asset::SkillAsset;
use crate::config::SkillConfig;
use crate::error::Result;
use crate::hooks::HookInstaller;

/// What `sync` did to the skill file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The file was created or replaced
    Written,
    /// The file already matched the packaged asset
    UpToDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub path: PathBuf,
    pub checksum: String,
    pub action: SyncAction,
}

/// What `inject` did to the agent-instructions document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectAction {
    /// The document did not exist and was created
    Created,
    /// The document was rewritten with a new or refreshed block
    Updated,
    /// The document already held the current block
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectReport {
    pub path: PathBuf,
    pub action: InjectAction,
}

/// Copy the packaged skill to its fixed location under `root`.
///
/// The file is left untouched when its checksum already matches.
pub fn sync_skill(root: &Path, config: &SkillConfig, asset: &dyn SkillAsset) -> Result<SyncReport> {
    let path = config.skill_path(root);
    let bytes = asset.bytes();
    let expected = checksum::compute_checksum(bytes);

    let existing = checksum::compute_file_checksum(&path).ok();
    let action = if existing.as_deref() == Some(expected.as_str()) {
        SyncAction::UpToDate
    } else {
        io::write_atomic(&path, bytes)?;
        SyncAction::Written
    };

    tracing::debug!(skill = asset.name(), path = %path.display(), ?action, "Synced skill");
    Ok(SyncReport {
        path,
        checksum: expected,
        action,
    })
}

/// Insert or refresh the managed pointer block in the agents document.
///
/// A missing document is treated as empty and created. The document is only
/// rewritten when its content actually changes.
pub fn inject_pointer(root: &Path, config: &SkillConfig) -> Result<InjectReport> {
    let path = config.agents_path(root);
    let existed = path.exists();
    let text = io::read_text_or_empty(&path)?;

    let updated = editor::apply(&text, &config.managed_block());
    let action = if existed && updated == text {
        InjectAction::Unchanged
    } else {
        io::write_text(&path, &updated)?;
        if existed {
            InjectAction::Updated
        } else {
            InjectAction::Created
        }
    };

    tracing::debug!(path = %path.display(), ?action, "Injected pointer");
    Ok(InjectReport { path, action })
}

/// State of the synced skill file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillState {
    Missing,
    Current,
    /// Present but different from the packaged asset
    Outdated,
}

/// State of the managed block in the agents document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// No block, or no document at all
    Missing,
    Current,
    /// A block exists but `inject` would change it
    Stale,
}

impl fmt::Display for SkillState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Current => write!(f, "current"),
            Self::Outdated => write!(f, "outdated"),
        }
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Current => write!(f, "current"),
            Self::Stale => write!(f, "stale"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub skill_path: PathBuf,
    pub skill: SkillState,
    pub agents_path: PathBuf,
    pub block: BlockState,
    pub hooks_installed: bool,
}

/// Inspect a repository without modifying it.
pub fn status(root: &Path, config: &SkillConfig, asset: &dyn SkillAsset) -> Result<StatusReport> {
    let skill_path = config.skill_path(root);
    let skill = match checksum::compute_file_checksum(&skill_path) {
        Ok(actual) if actual == checksum::compute_checksum(asset.bytes()) => SkillState::Current,
        Ok(_) => SkillState::Outdated,
        Err(_) => SkillState::Missing,
    };

    let agents_path = config.agents_path(root);
    let text = io::read_text_or_empty(&agents_path)?;
    let managed = config.managed_block();
    let block = if editor::locate(&text, &managed).is_none() {
        BlockState::Missing
    } else if editor::is_current(&text, &managed) {
        BlockState::Current
    } else {
        BlockState::Stale
    };

    let hooks_installed = HookInstaller::new(config.hooks.clone()).is_installed(root);

    Ok(StatusReport {
        skill_path,
        skill,
        agents_path,
        block,
        hooks_installed,
    })
}
