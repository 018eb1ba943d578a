//! Core operations for agent-skills.
//!
//! - [`ops::sync_skill`] copies the packaged skill into a repository.
//! - [`ops::inject_pointer`] maintains the managed pointer block in the
//!   agent-instructions document.
//! - [`hooks::HookInstaller`] runs the external commit-hook installer.
//!
//! All operations take an explicit [`SkillConfig`]; nothing reads global state.

pub mod asset;
pub mod config;
pub mod error;
pub mod hooks;
pub mod ops;

pub use asset::{EmbeddedSkill, InMemorySkill, SkillAsset};
pub use config::{HookSettings, SkillConfig};
pub use error::{Error, Result};
pub use hooks::{Decision, HookInstaller, HookMode, HookOutcome};
pub use ops::{
    BlockState, InjectAction, InjectReport, SkillState, StatusReport, SyncAction, SyncReport,
    inject_pointer, status, sync_skill,
};
