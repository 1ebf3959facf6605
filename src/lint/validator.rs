//! Rule evaluation and scoring.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::{parse, ParsedCommit};
use super::rules::{rules, Rule, RuleId, Severity};
use super::suggestions::suggest;

const PARSE_FAILED_MESSAGE: &str = "Commit message doesn't follow Conventional Commits format";
const MAX_SCORE: u32 = 100;
const WARNING_PENALTY: u32 = 10;

/// A single rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Name of the failed rule.
    pub rule: RuleId,
    /// Human-readable message.
    pub message: String,
    /// Severity of the failure.
    #[serde(rename = "level")]
    pub severity: Severity,
}

impl From<&Rule> for Violation {
    fn from(rule: &Rule) -> Self {
        Self {
            rule: rule.id,
            message: rule.message.to_string(),
            severity: rule.severity,
        }
    }
}

/// Outcome of validating one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no error-level violation occurred.
    pub is_valid: bool,
    /// Quality score in `0..=100`.
    pub score: u32,
    /// Violations in rule evaluation order.
    pub violations: Vec<Violation>,
    /// Suggested fixes.
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Number of error-level violations.
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warning-level violations.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }
}

/// Validates a raw commit message.
pub fn validate(message: &str) -> ValidationResult {
    let commit = parse(message);
    validate_parsed(&commit)
}

/// Validates an already parsed commit.
pub fn validate_parsed(commit: &ParsedCommit) -> ValidationResult {
    if !commit.is_parsed() {
        debug!("Commit header did not parse");
        let violations = vec![Violation {
            rule: RuleId::ParseFailed,
            message: PARSE_FAILED_MESSAGE.to_string(),
            severity: Severity::Error,
        }];
        let suggestions = suggest(commit, &violations);
        return ValidationResult {
            is_valid: false,
            score: 0,
            violations,
            suggestions,
        };
    }

    let violations: Vec<Violation> = rules()
        .iter()
        .filter(|rule| !(rule.check)(commit))
        .map(Violation::from)
        .collect();

    let errors = violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .count();
    let warnings = violations.len() - errors;

    let score = score(errors, warnings);
    let suggestions = suggest(commit, &violations);

    debug!(
        commit_type = %commit.commit_type,
        errors,
        warnings,
        score,
        "Validated commit message"
    );

    ValidationResult {
        is_valid: errors == 0,
        score,
        violations,
        suggestions,
    }
}

fn score(errors: usize, warnings: usize) -> u32 {
    if errors > 0 {
        return 0;
    }
    let penalty = u32::try_from(warnings)
        .unwrap_or(u32::MAX)
        .saturating_mul(WARNING_PENALTY);
    MAX_SCORE.saturating_sub(penalty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_names(result: &ValidationResult) -> Vec<&'static str> {
        result.violations.iter().map(|v| v.rule.as_str()).collect()
    }

    #[test]
    fn valid_message_scores_full_marks() {
        let result = validate("feat(auth): add login functionality");
        assert!(result.is_valid);
        assert_eq!(result.score, 100);
        assert!(result.violations.is_empty());
        assert_eq!(
            result.suggestions,
            vec!["Example: feat(auth): add login functionality"]
        );
    }

    #[test]
    fn unparseable_message_short_circuits() {
        let result = validate("fixed bug");
        assert!(!result.is_valid);
        assert_eq!(result.score, 0);
        assert_eq!(rule_names(&result), vec!["parse-failed"]);
        assert_eq!(result.violations[0].severity, Severity::Error);
        assert_eq!(result.violations[0].message, PARSE_FAILED_MESSAGE);
    }

    #[test]
    fn warnings_reduce_score_but_keep_validity() {
        let result = validate("feat: added new thing.");
        assert!(result.is_valid);
        assert_eq!(result.score, 80);
        assert_eq!(rule_names(&result), vec!["no-period", "imperative-mood"]);
        assert!(result
            .suggestions
            .contains(&"Start with a verb like 'add', 'fix', 'update', 'remove'".to_string()));
        assert_eq!(
            result.suggestions.last().map(String::as_str),
            Some("Example: feat: add new thing.")
        );
    }

    #[test]
    fn errors_force_zero_score() {
        let result = validate("Feat: x");
        assert!(!result.is_valid);
        assert_eq!(result.score, 0);
        assert_eq!(
            rule_names(&result),
            vec!["type-case", "type-enum", "description-min-length"]
        );
        assert_eq!(result.error_count(), 2);
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn breaking_change_is_valid() {
        let result = validate("feat!: remove old api");
        assert!(result.is_valid);
        assert_eq!(result.score, 100);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn unknown_type_is_invalid() {
        let result = validate("feature: add a thing here");
        assert!(!result.is_valid);
        assert_eq!(rule_names(&result), vec!["type-enum"]);
        assert!(result
            .suggestions
            .iter()
            .any(|s| s.starts_with("Start with a valid type")));
    }

    #[test]
    fn empty_string_is_a_parse_failure() {
        let result = validate("");
        assert!(!result.is_valid);
        assert_eq!(rule_names(&result), vec!["parse-failed"]);
    }

    #[test]
    fn score_floor() {
        assert_eq!(score(0, 0), 100);
        assert_eq!(score(0, 4), 60);
        assert_eq!(score(0, 10), 0);
        assert_eq!(score(0, 11), 0);
        assert_eq!(score(1, 0), 0);
    }

    #[test]
    fn violation_serializes_with_level() {
        let result = validate("feat: tiny");
        let json = serde_json::to_value(&result.violations[0]).unwrap();
        assert_eq!(json["rule"], "description-min-length");
        assert_eq!(json["level"], "warning");
    }
}
