//! Companion commit-hook installation
//!
//! Hook installation is a best-effort step that follows a successful `sync`
//! or `inject`. Every failure is reported as a [`HookOutcome`] rather than an
//! error, so it can never undo or fail the primary operation.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::config::HookSettings;

/// Answer to the "install hooks?" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The user agreed
    Yes,
    /// The user declined
    No,
    /// Nobody was asked (non-interactive session)
    AutoYes,
}

impl Decision {
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes | Self::AutoYes)
    }
}

/// The caller's hook policy for one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookMode {
    /// Install without asking
    Install,
    /// Never install
    Skip,
    /// Ask through the supplied decision function
    #[default]
    Prompt,
}

/// What happened when hooks were requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// The hook file already carries the marker; nothing was run
    AlreadyInstalled,
    /// Installation was not requested
    Skipped,
    /// The command ran and exited successfully
    Installed,
    /// The user answered no; nothing was run
    DeclinedByUser,
    /// The command could not be found
    CommandNotFound,
    /// The command ran and failed with this exit code (`-1` when unknown)
    CommandFailed(i32),
}

impl fmt::Display for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInstalled => write!(f, "already installed"),
            Self::Skipped => write!(f, "skipped"),
            Self::Installed => write!(f, "installed"),
            Self::DeclinedByUser => write!(f, "declined"),
            Self::CommandNotFound => write!(f, "command not found"),
            Self::CommandFailed(code) => write!(f, "command failed with exit code {}", code),
        }
    }
}

/// Detects and installs commit hooks by shelling out to an external tool.
#[derive(Debug, Clone)]
pub struct HookInstaller {
    settings: HookSettings,
}

impl HookInstaller {
    pub fn new(settings: HookSettings) -> Self {
        Self { settings }
    }

    /// Whether the hook file under `repo_root` carries the configured marker.
    ///
    /// A missing or unreadable hook file counts as not installed.
    pub fn is_installed(&self, repo_root: &Path) -> bool {
        let hook_path = repo_root.join(&self.settings.hook_file);
        match std::fs::read(&hook_path) {
            Ok(content) => String::from_utf8_lossy(&content).contains(&self.settings.marker),
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(path = %hook_path.display(), error = %e, "Could not read hook file");
                false
            }
        }
    }

    /// Ask through `confirm`, then run the install command in `repo_root`.
    pub fn install(&self, repo_root: &Path, confirm: &dyn Fn(&str) -> Decision) -> HookOutcome {
        let question = format!("Install commit hooks with `{}`?", self.settings.command);
        let decision = confirm(&question);
        tracing::debug!(?decision, "Hook install decision");
        if !decision.is_yes() {
            return HookOutcome::DeclinedByUser;
        }
        self.run_command(repo_root)
    }

    /// Apply `mode`: skip, install directly, or install after asking.
    ///
    /// Hooks that are already present are left alone and nobody is asked.
    pub fn ensure(
        &self,
        repo_root: &Path,
        mode: HookMode,
        confirm: &dyn Fn(&str) -> Decision,
    ) -> HookOutcome {
        if mode == HookMode::Skip {
            return HookOutcome::Skipped;
        }
        if self.is_installed(repo_root) {
            return HookOutcome::AlreadyInstalled;
        }
        match mode {
            HookMode::Install => self.run_command(repo_root),
            _ => self.install(repo_root, confirm),
        }
    }

    fn run_command(&self, repo_root: &Path) -> HookOutcome {
        let mut parts = self.settings.command.split_whitespace();
        let Some(program) = parts.next() else {
            return HookOutcome::CommandNotFound;
        };
        let args: Vec<&str> = parts.collect();

        tracing::debug!(program, ?args, cwd = %repo_root.display(), "Running hook installer");
        match Command::new(program)
            .args(&args)
            .current_dir(repo_root)
            .status()
        {
            Ok(status) if status.success() => HookOutcome::Installed,
            Ok(status) => HookOutcome::CommandFailed(status.code().unwrap_or(-1)),
            Err(e) if e.kind() == ErrorKind::NotFound => HookOutcome::CommandNotFound,
            Err(e) => {
                tracing::warn!(program, error = %e, "Hook installer could not be started");
                HookOutcome::CommandFailed(-1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn installer(command: &str) -> HookInstaller {
        HookInstaller::new(HookSettings {
            command: command.to_string(),
            ..HookSettings::default()
        })
    }

    #[test]
    fn test_decision_is_yes() {
        assert!(Decision::Yes.is_yes());
        assert!(Decision::AutoYes.is_yes());
        assert!(!Decision::No.is_yes());
    }

    #[test]
    fn test_empty_command_is_not_found() {
        let temp = TempDir::new().unwrap();
        let outcome = installer("   ").install(temp.path(), &|_| Decision::AutoYes);
        assert_eq!(outcome, HookOutcome::CommandNotFound);
    }

    #[test]
    fn test_skip_never_asks() {
        let temp = TempDir::new().unwrap();
        let asked = Cell::new(false);
        let outcome = installer("true").ensure(temp.path(), HookMode::Skip, &|_| {
            asked.set(true);
            Decision::Yes
        });
        assert_eq!(outcome, HookOutcome::Skipped);
        assert!(!asked.get());
    }

    #[test]
    fn test_question_names_command() {
        let temp = TempDir::new().unwrap();
        let seen = std::cell::RefCell::new(String::new());
        installer("pre-commit install").install(temp.path(), &|q| {
            *seen.borrow_mut() = q.to_string();
            Decision::No
        });
        assert!(seen.borrow().contains("`pre-commit install`"));
    }
}
