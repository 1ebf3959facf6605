//! The fixed rule table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::parser::ParsedCommit;

/// Commit types accepted by `type-enum`.
pub const VALID_TYPES: [&str; 8] = [
    "feat", "fix", "docs", "style", "refactor", "test", "chore", "perf",
];

/// First words that signal a non-imperative description.
const NON_IMPERATIVE_WORDS: [&str; 12] = [
    "added", "adds", "adding", "fixed", "fixes", "fixing", "updated", "updates", "updating",
    "changed", "changes", "changing",
];

const DESCRIPTION_MIN_CHARS: usize = 10;
const DESCRIPTION_MAX_CHARS: usize = 72;

/// Severity level for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Invalidates the message and forces the score to 0.
    Error,
    /// Costs 10 points but never invalidates.
    Warning,
}

impl Severity {
    /// Returns the wire name, `"error"` or `"warning"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable identifiers of every violation the engine can report.
///
/// Collaborators may branch on these names, so the serialized form must not
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// The header matched neither pattern.
    ParseFailed,
    /// No commit type.
    TypeRequired,
    /// Commit type is not lowercase.
    TypeCase,
    /// Commit type is not one of [`VALID_TYPES`].
    TypeEnum,
    /// Blank description.
    DescriptionRequired,
    /// Description shorter than 10 characters.
    DescriptionMinLength,
    /// Description longer than 72 characters.
    DescriptionMaxLength,
    /// Description ends with a full stop.
    NoPeriod,
    /// Description starts with a past or progressive tense verb.
    ImperativeMood,
}

impl RuleId {
    /// Returns the kebab-case rule name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ParseFailed => "parse-failed",
            Self::TypeRequired => "type-required",
            Self::TypeCase => "type-case",
            Self::TypeEnum => "type-enum",
            Self::DescriptionRequired => "description-required",
            Self::DescriptionMinLength => "description-min-length",
            Self::DescriptionMaxLength => "description-max-length",
            Self::NoPeriod => "no-period",
            Self::ImperativeMood => "imperative-mood",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named predicate over a parsed commit.
///
/// `check` returns `true` when the commit satisfies the rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Rule identifier.
    pub id: RuleId,
    /// Predicate; must be total and side-effect free.
    pub check: fn(&ParsedCommit) -> bool,
    /// Human-readable message reported on failure.
    pub message: &'static str,
    /// Severity of a failure.
    pub severity: Severity,
}

static RULES: [Rule; 8] = [
    Rule {
        id: RuleId::TypeRequired,
        check: type_present,
        message: "Commit type is required (feat, fix, docs, etc.)",
        severity: Severity::Error,
    },
    Rule {
        id: RuleId::TypeCase,
        check: type_lowercase,
        message: "Type must be lowercase",
        severity: Severity::Error,
    },
    Rule {
        id: RuleId::TypeEnum,
        check: type_known,
        message: "Type must be one of: feat, fix, docs, style, refactor, test, chore, perf",
        severity: Severity::Error,
    },
    Rule {
        id: RuleId::DescriptionRequired,
        check: description_present,
        message: "Description is required",
        severity: Severity::Error,
    },
    Rule {
        id: RuleId::DescriptionMinLength,
        check: description_long_enough,
        message: "Description must be at least 10 characters",
        severity: Severity::Warning,
    },
    Rule {
        id: RuleId::DescriptionMaxLength,
        check: description_short_enough,
        message: "Description should not exceed 72 characters (GitHub truncates)",
        severity: Severity::Warning,
    },
    Rule {
        id: RuleId::NoPeriod,
        check: description_without_period,
        message: "Description should not end with a period",
        severity: Severity::Warning,
    },
    Rule {
        id: RuleId::ImperativeMood,
        check: description_imperative,
        message: "Use imperative mood (e.g., 'add' not 'added', 'fix' not 'fixed')",
        severity: Severity::Warning,
    },
];

/// Returns the rules in evaluation order.
///
/// The order is observable: violations are reported in it.
pub fn rules() -> &'static [Rule] {
    &RULES
}

fn type_present(commit: &ParsedCommit) -> bool {
    !commit.commit_type.is_empty()
}

fn type_lowercase(commit: &ParsedCommit) -> bool {
    commit.commit_type == commit.commit_type.to_lowercase()
}

fn type_known(commit: &ParsedCommit) -> bool {
    VALID_TYPES.contains(&commit.commit_type.as_str())
}

fn description_present(commit: &ParsedCommit) -> bool {
    !commit.description.trim().is_empty()
}

fn description_long_enough(commit: &ParsedCommit) -> bool {
    commit.description.chars().count() >= DESCRIPTION_MIN_CHARS
}

fn description_short_enough(commit: &ParsedCommit) -> bool {
    commit.description.chars().count() <= DESCRIPTION_MAX_CHARS
}

fn description_without_period(commit: &ParsedCommit) -> bool {
    !commit.description.ends_with('.')
}

fn description_imperative(commit: &ParsedCommit) -> bool {
    // Nothing to judge; an empty description is already flagged elsewhere.
    let Some(first_word) = commit.description.split_whitespace().next() else {
        return true;
    };
    !NON_IMPERATIVE_WORDS.contains(&first_word.to_lowercase().as_str())
}
