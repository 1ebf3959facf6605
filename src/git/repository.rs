//! Git repository operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::Repository;
use tracing::debug;

use super::{CommitInfo, GitError};

/// File git writes the in-progress commit message to.
const COMMIT_EDITMSG: &str = "COMMIT_EDITMSG";

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing the current directory
    pub fn open() -> Result<Self> {
        Self::open_at(".")
    }

    /// Open the repository containing the specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path)
            .map_err(|_| GitError::NotARepository(path.to_path_buf()))?;

        debug!(git_dir = %repo.path().display(), "Opened git repository");
        Ok(Self { repo })
    }

    /// Get the `.git` directory path
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Get the hooks directory path
    ///
    /// Hooks live in the common git dir, shared by every linked worktree.
    pub fn hooks_dir(&self) -> PathBuf {
        self.repo.commondir().join("hooks")
    }

    /// Get the path git uses for the message of the commit being made
    ///
    /// Unlike hooks, this file is per worktree.
    pub fn commit_message_file(&self) -> PathBuf {
        self.git_dir().join(COMMIT_EDITMSG)
    }

    /// Get the most recent `count` commits reachable from HEAD, newest first
    pub fn get_recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>> {
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker.push_head().context("Failed to push HEAD")?;

        let mut commits = Vec::new();
        for oid in walker.take(count) {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;
            commits.push(CommitInfo::from_git_commit(&commit)?);
        }

        debug!(requested = count, found = commits.len(), "Listed recent commits");
        Ok(commits)
    }

    /// Parse commit range and get commits, oldest first
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<CommitInfo>> {
        let (start_spec, end_spec) = range
            .split_once("..")
            .filter(|(start, end)| !start.is_empty() && !end.is_empty() && !end.contains(".."))
            .ok_or_else(|| GitError::InvalidRange(range.to_string()))?;

        let start_commit = self
            .repo
            .revparse_single(start_spec)
            .with_context(|| format!("Failed to parse start commit: {start_spec}"))?
            .peel_to_commit()
            .context("Failed to peel start object to commit")?;
        let end_commit = self
            .repo
            .revparse_single(end_spec)
            .with_context(|| format!("Failed to parse end commit: {end_spec}"))?
            .peel_to_commit()
            .context("Failed to peel end object to commit")?;

        // Walk from end_commit back to start_commit (exclusive)
        let mut walker = self.repo.revwalk().context("Failed to create revwalk")?;
        walker
            .push(end_commit.id())
            .context("Failed to push end commit")?;
        walker
            .hide(start_commit.id())
            .context("Failed to hide start commit")?;

        let mut commits = Vec::new();
        for oid in walker {
            let oid = oid.context("Failed to get commit OID from walker")?;
            let commit = self
                .repo
                .find_commit(oid)
                .context("Failed to find commit")?;

            commits.push(CommitInfo::from_git_commit(&commit)?);
        }

        // Reverse to get chronological order (oldest first)
        commits.reverse();

        debug!(range, found = commits.len(), "Listed commits in range");
        Ok(commits)
    }
}
