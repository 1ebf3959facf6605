//! Check result types for single messages and commit history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::git::CommitInfo;
use crate::lint::{ParsedCommit, ValidationResult};

/// Validation of a single message together with its parsed form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageReport {
    /// The message as supplied.
    pub message: String,
    /// Structured fields extracted from the message.
    pub parsed: ParsedCommit,
    /// Validation outcome.
    pub result: ValidationResult,
}

impl MessageReport {
    /// Parses and validates `message`.
    pub fn new(message: &str) -> Self {
        let parsed = crate::lint::parse(message);
        let result = crate::lint::validate_parsed(&parsed);
        Self {
            message: message.to_string(),
            parsed,
            result,
        }
    }
}

/// Complete report for a set of commits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Individual commit check results.
    pub commits: Vec<CommitCheckResult>,
    /// Summary statistics.
    pub summary: CheckSummary,
}

/// Result of checking a single commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitCheckResult {
    /// Full commit hash.
    pub hash: String,
    /// Abbreviated commit hash.
    pub short_hash: String,
    /// Commit author.
    pub author: String,
    /// Commit date (`YYYY-MM-DD`).
    pub date: String,
    /// First line of the commit message.
    pub subject: String,
    /// Validation outcome for the full message.
    pub result: ValidationResult,
}

impl CommitCheckResult {
    /// Validates a commit's message.
    pub fn from_commit(commit: &CommitInfo) -> Self {
        Self {
            hash: commit.hash.clone(),
            short_hash: commit.short_hash.clone(),
            author: commit.author.clone(),
            date: commit.short_date(),
            subject: commit.subject().to_string(),
            result: crate::lint::validate(&commit.message),
        }
    }
}

/// Summary statistics for a check report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSummary {
    /// Total number of commits checked.
    pub total_commits: usize,
    /// Number of valid commits.
    pub valid_commits: usize,
    /// Number of invalid commits.
    pub invalid_commits: usize,
    /// Average score, rounded down. 0 for an empty report.
    pub average_score: u32,
    /// Total number of errors found.
    pub error_count: usize,
    /// Total number of warnings found.
    pub warning_count: usize,
}

impl CheckSummary {
    /// Creates a summary from a list of commit check results.
    pub fn from_results(results: &[CommitCheckResult]) -> Self {
        let total_commits = results.len();
        let valid_commits = results.iter().filter(|r| r.result.is_valid).count();

        let total_score: u64 = results.iter().map(|r| u64::from(r.result.score)).sum();
        let average_score = if total_commits == 0 {
            0
        } else {
            u32::try_from(total_score / total_commits as u64).unwrap_or(0)
        };

        Self {
            total_commits,
            valid_commits,
            invalid_commits: total_commits - valid_commits,
            average_score,
            error_count: results.iter().map(|r| r.result.error_count()).sum(),
            warning_count: results.iter().map(|r| r.result.warning_count()).sum(),
        }
    }

    /// Share of valid commits as a percentage.
    pub fn valid_percentage(&self) -> f64 {
        if self.total_commits == 0 {
            0.0
        } else {
            self.valid_commits as f64 / self.total_commits as f64 * 100.0
        }
    }
}

impl CheckReport {
    /// Validates every commit and builds the report.
    pub fn from_commits(commits: &[CommitInfo]) -> Self {
        Self::new(commits.iter().map(CommitCheckResult::from_commit).collect())
    }

    /// Creates a new check report from commit results.
    pub fn new(commits: Vec<CommitCheckResult>) -> Self {
        let summary = CheckSummary::from_results(&commits);
        Self { commits, summary }
    }

    /// Checks whether every commit is valid.
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.summary.invalid_commits == 0
    }

    /// Exit code: 1 when any commit is invalid.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_valid())
    }
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format.
    #[default]
    Text,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(format!(
                "unknown output format '{other}' (expected text, json or yaml)"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
