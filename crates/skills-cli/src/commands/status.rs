//! Status command implementation

use std::path::Path;

use colored::{ColoredString, Colorize};
use skills_core::{BlockState, EmbeddedSkill, SkillState, status};

use crate::commands::load_config;
use crate::error::Result;

/// Run the status command
pub fn run_status(root: &Path, agents_file: Option<String>) -> Result<()> {
    let config = load_config(root, agents_file, None)?;
    let report = status(root, &config, &EmbeddedSkill)?;

    println!("{}", "Skill Status".bold());
    println!();
    println!("{}:    {}", "Root".dimmed(), root.display());
    println!(
        "{}:   {} ({})",
        "Skill".dimmed(),
        config.skill_rel_path(),
        skill_label(report.skill)
    );
    println!(
        "{}:  {} ({})",
        "Agents".dimmed(),
        config.agents_file,
        block_label(report.block)
    );
    let hooks = if report.hooks_installed {
        "installed".green()
    } else {
        "not installed".yellow()
    };
    println!("{}:   {}", "Hooks".dimmed(), hooks);

    if report.skill != SkillState::Current {
        println!();
        println!("Run {} to update the skill.", "agent-skills sync".cyan());
    }
    if report.block != BlockState::Current {
        println!("Run {} to update the pointer.", "agent-skills inject".cyan());
    }

    Ok(())
}

fn skill_label(state: SkillState) -> ColoredString {
    match state {
        SkillState::Current => state.to_string().green(),
        SkillState::Outdated => state.to_string().yellow(),
        SkillState::Missing => state.to_string().red(),
    }
}

fn block_label(state: BlockState) -> ColoredString {
    match state {
        BlockState::Current => state.to_string().green(),
        BlockState::Stale => state.to_string().yellow(),
        BlockState::Missing => state.to_string().red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skills_test_utils::repo::TestRepo;

    #[test]
    fn test_status_empty_repo() {
        let repo = TestRepo::with_git();
        assert!(run_status(repo.root(), None).is_ok());
    }

    #[test]
    fn test_status_does_not_write() {
        let repo = TestRepo::with_git();
        run_status(repo.root(), None).unwrap();
        repo.assert_file_not_exists("AGENTS.md");
        repo.assert_file_not_exists(".agent-skills");
    }
}
