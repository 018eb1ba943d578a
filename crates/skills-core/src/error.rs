//! Error types for skills-core

use std::path::PathBuf;

/// Result type for skills-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skills-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from skills-fs
    #[error(transparent)]
    Fs(#[from] skills_fs::Error),

    /// The repository config file exists but could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}
