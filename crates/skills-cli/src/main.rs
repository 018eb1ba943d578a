//! agent-skills CLI
//!
//! Distributes the packaged skill into a repository and keeps the pointer
//! block in its agent-instructions file current.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Skill sync for agent-instructions files", "agent-skills".green().bold());
            println!();
            println!("Run {} for available commands.", "agent-skills --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sync { repo, hooks } => {
            let root = resolve_root(repo.repo.as_deref())?;
            commands::run_sync(&root, hooks.mode(), hooks.hooks_command)
        }
        Commands::Inject {
            repo,
            agents_file,
            hooks,
        } => {
            let root = resolve_root(repo.repo.as_deref())?;
            commands::run_inject(&root, agents_file, hooks.mode(), hooks.hooks_command)
        }
        Commands::Status { repo, agents_file } => {
            let root = resolve_root(repo.repo.as_deref())?;
            commands::run_status(&root, agents_file)
        }
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "agent-skills",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn resolve_root(repo: Option<&std::path::Path>) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(commands::resolve_root(&cwd, repo))
}
