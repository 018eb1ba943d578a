//! Interactive prompts for CLI commands
//!
//! Uses dialoguer when a user is at the terminal. Sessions without a terminal
//! never block on a question and answer yes.

use std::io::IsTerminal;

use dialoguer::Confirm;
use skills_core::Decision;

/// Whether a human can answer prompts.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// Pick the decision function for this session.
pub fn decider(interactive: bool) -> fn(&str) -> Decision {
    if interactive { ask } else { auto_yes }
}

fn auto_yes(_question: &str) -> Decision {
    Decision::AutoYes
}

fn ask(question: &str) -> Decision {
    match Confirm::new().with_prompt(question).default(true).interact() {
        Ok(true) => Decision::Yes,
        Ok(false) => Decision::No,
        Err(e) => {
            tracing::warn!(error = %e, "Prompt failed, treating as declined");
            Decision::No
        }
    }
}
