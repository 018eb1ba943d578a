//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use skills_core::HookMode;

/// Sync and inject the beads project-management skill
#[derive(Parser, Debug)]
#[command(name = "agent-skills")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy the packaged skill into .agent-skills/<name>/SKILL.md
    Sync {
        #[command(flatten)]
        repo: RepoArgs,

        #[command(flatten)]
        hooks: HookArgs,
    },

    /// Insert or update the managed pointer block in AGENTS.md
    ///
    /// Examples:
    ///   agent-skills inject
    ///   agent-skills inject --agents-file CLAUDE.md
    ///   agent-skills inject --no-install-hooks
    Inject {
        #[command(flatten)]
        repo: RepoArgs,

        /// Agents file relative to the repository root
        #[arg(long)]
        agents_file: Option<String>,

        #[command(flatten)]
        hooks: HookArgs,
    },

    /// Show whether the skill, pointer block and hooks are in place
    Status {
        #[command(flatten)]
        repo: RepoArgs,

        /// Agents file relative to the repository root
        #[arg(long)]
        agents_file: Option<String>,
    },

    /// Print the version
    Version,

    /// Generate shell completions
    ///
    /// Examples:
    ///   agent-skills completions bash > ~/.local/share/bash-completion/completions/agent-skills
    ///   agent-skills completions zsh > ~/.zfunc/_agent-skills
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Repository selection shared by all commands
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct RepoArgs {
    /// Path inside the repository (defaults to the git root of the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,
}

/// Hook installation flags
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct HookArgs {
    /// Install commit hooks without asking
    #[arg(long, conflicts_with = "no_install_hooks")]
    pub install_hooks: bool,

    /// Never install commit hooks
    #[arg(long)]
    pub no_install_hooks: bool,

    /// Command that installs the hooks
    #[arg(long, env = "AGENT_SKILLS_HOOKS_COMMAND")]
    pub hooks_command: Option<String>,
}

impl HookArgs {
    /// Neither flag means ask.
    pub fn mode(&self) -> HookMode {
        if self.install_hooks {
            HookMode::Install
        } else if self.no_install_hooks {
            HookMode::Skip
        } else {
            HookMode::Prompt
        }
    }
}
