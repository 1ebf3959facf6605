//! Git operations and repository management.

pub mod commit;
pub mod error;
pub mod hooks;
pub mod repository;

pub use commit::CommitInfo;
pub use error::GitError;
pub use hooks::{HookManager, HookStatus, InstallOutcome};
pub use repository::GitRepository;

/// Number of hex characters to show in abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 8;
