//! Git-specific error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by repository and hook operations.
#[derive(Error, Debug)]
pub enum GitError {
    /// The working directory is not inside a git repository.
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// A commit-msg hook written by another tool is already present.
    #[error("A commit-msg hook already exists at {0}. Use --force to overwrite it")]
    HookExists(PathBuf),

    /// Forcing an install would overwrite the backup of an earlier hook.
    #[error("A hook backup already exists at {0}. Move it away before forcing another install")]
    BackupExists(PathBuf),

    /// No commit-msg hook is present.
    #[error("No commit-msg hook is installed")]
    HookNotInstalled,

    /// The installed commit-msg hook was not written by commit-lint.
    #[error("The commit-msg hook at {0} was not installed by commit-lint")]
    HookNotOwned(PathBuf),

    /// A commit range without the `FROM..TO` shape.
    #[error("Invalid range format '{0}'. Use: from..to (e.g. HEAD~3..HEAD)")]
    InvalidRange(String),

    /// Nothing to validate: no argument, no file, no COMMIT_EDITMSG.
    #[error("No commit message provided")]
    NoCommitMessage,
}

// Note: anyhow already has a blanket impl for thiserror::Error types
