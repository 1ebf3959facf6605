//! Commit metadata for history validation

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use git2::Commit;
use serde::{Deserialize, Serialize};

use super::SHORT_HASH_LEN;

/// Commit information structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Full SHA-1 hash of the commit
    pub hash: String,
    /// Abbreviated hash for display
    pub short_hash: String,
    /// Commit author name
    pub author: String,
    /// Commit date with the author's timezone
    pub date: DateTime<FixedOffset>,
    /// The full commit message as written by the author
    pub message: String,
}

impl CommitInfo {
    /// Create CommitInfo from git2::Commit
    pub fn from_git_commit(commit: &Commit) -> Result<Self> {
        let hash = commit.id().to_string();
        let short_hash = hash.chars().take(SHORT_HASH_LEN).collect();

        let author = commit.author().name().unwrap_or("Unknown").to_string();

        let timestamp = commit.author().when();
        let offset = FixedOffset::east_opt(timestamp.offset_minutes() * 60)
            .or_else(|| FixedOffset::east_opt(0))
            .context("Invalid commit timezone offset")?;
        let date = DateTime::from_timestamp(timestamp.seconds(), 0)
            .context("Invalid commit timestamp")?
            .with_timezone(&offset);

        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

        Ok(Self {
            hash,
            short_hash,
            author,
            date,
            message,
        })
    }

    /// First line of the message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Commit date as `YYYY-MM-DD`.
    pub fn short_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
