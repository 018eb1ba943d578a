//! Inject command implementation

use std::path::Path;

use colored::Colorize;
use skills_core::{HookMode, InjectAction, inject_pointer};

use crate::commands::{hooks, load_config};
use crate::error::Result;

/// Run the inject command
pub fn run_inject(
    root: &Path,
    agents_file: Option<String>,
    hook_mode: HookMode,
    hooks_command: Option<String>,
) -> Result<()> {
    let config = load_config(root, agents_file, hooks_command)?;
    let report = inject_pointer(root, &config)?;

    match report.action {
        InjectAction::Created | InjectAction::Updated => println!(
            "{} Injected pointer into {}",
            "\u{2713}".green().bold(),
            report.path.display()
        ),
        InjectAction::Unchanged => println!(
            "{} Pointer already current in {}",
            "OK".green().bold(),
            report.path.display()
        ),
    }

    hooks::run_hook_step(root, &config, hook_mode);
    Ok(())
}
