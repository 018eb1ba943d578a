//! Sync command implementation

use std::path::Path;

use colored::Colorize;
use skills_core::{EmbeddedSkill, HookMode, SyncAction, sync_skill};

use crate::commands::{hooks, load_config};
use crate::error::Result;

/// Run the sync command
///
/// Writes the packaged skill under the repository root, then runs the
/// optional hook step.
pub fn run_sync(root: &Path, hook_mode: HookMode, hooks_command: Option<String>) -> Result<()> {
    let config = load_config(root, None, hooks_command)?;
    let report = sync_skill(root, &config, &EmbeddedSkill)?;

    match report.action {
        SyncAction::Written => println!(
            "{} Synced skill to {}",
            "\u{2713}".green().bold(),
            report.path.display()
        ),
        SyncAction::UpToDate => println!(
            "{} Skill already up to date at {}",
            "OK".green().bold(),
            report.path.display()
        ),
    }

    hooks::run_hook_step(root, &config, hook_mode);
    Ok(())
}
