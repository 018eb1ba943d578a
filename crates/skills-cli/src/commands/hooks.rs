//! Best-effort hook installation after a primary command

use std::path::Path;

use colored::Colorize;
use skills_core::{HookInstaller, HookMode, HookOutcome, SkillConfig};

use crate::interactive;

/// Run the hook step and report its outcome.
///
/// Never fails: by the time this runs the primary artifact is already
/// written, and no hook outcome changes the command's exit status.
pub fn run_hook_step(root: &Path, config: &SkillConfig, mode: HookMode) -> HookOutcome {
    let installer = HookInstaller::new(config.hooks.clone());
    let decide = interactive::decider(interactive::is_interactive());
    let outcome = installer.ensure(root, mode, &decide);
    report(&outcome, &config.hooks.command);
    outcome
}

fn report(outcome: &HookOutcome, command: &str) {
    match outcome {
        HookOutcome::Skipped => {}
        HookOutcome::AlreadyInstalled => {
            println!("{} Commit hooks already installed.", "note:".yellow().bold());
        }
        HookOutcome::Installed => {
            println!(
                "{} Installed commit hooks with {}",
                "\u{2713}".green().bold(),
                command.cyan()
            );
        }
        HookOutcome::DeclinedByUser => {
            println!(
                "{} Skipped commit hooks. Run {} later to install them.",
                "note:".yellow().bold(),
                command.cyan()
            );
        }
        HookOutcome::CommandNotFound => {
            println!(
                "{} Hook installer {} not found; commit hooks were not installed.",
                "warning:".yellow().bold(),
                command.cyan()
            );
        }
        HookOutcome::CommandFailed(code) => {
            println!(
                "{} {} exited with code {}; commit hooks may not be installed.",
                "warning:".yellow().bold(),
                command.cyan(),
                code
            );
        }
    }
}
