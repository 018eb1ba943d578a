//! Filesystem primitives for agent-skills
//!
//! Provides repository root discovery and crash-safe whole-file writes.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod root;

pub use constants::RepoPath;
pub use error::{Error, Result};
pub use root::resolve_repo_root;
