//! Suggestion generation from violations.

use super::parser::ParsedCommit;
use super::rules::RuleId;
use super::validator::Violation;

const MORE_DESCRIPTIVE: &str = "Make the description more descriptive";
const IMPERATIVE_VERB: &str = "Start with a verb like 'add', 'fix', 'update', 'remove'";
const VALID_TYPE_GUIDANCE: &str =
    "Start with a valid type: feat:, fix:, docs:, style:, refactor:, test:, chore:, perf:";
const FORMAT_GUIDANCE: &str =
    "Use format: type(scope): description\ne.g., feat(auth): add login functionality";

/// Maps violations to suggestion text, in a deterministic order.
///
/// Per-violation hints come first in violation order, then the type guidance,
/// then the format guidance, then a corrected example when the header parsed.
pub fn suggest(commit: &ParsedCommit, violations: &[Violation]) -> Vec<String> {
    let mut suggestions = Vec::new();
    let mut type_issue = false;
    let mut format_issue = false;

    for violation in violations {
        match violation.rule {
            RuleId::TypeRequired | RuleId::TypeEnum => type_issue = true,
            RuleId::ParseFailed => format_issue = true,
            RuleId::DescriptionMinLength => suggestions.push(MORE_DESCRIPTIVE.to_string()),
            RuleId::ImperativeMood => suggestions.push(IMPERATIVE_VERB.to_string()),
            _ => {}
        }
    }

    if type_issue {
        suggestions.push(VALID_TYPE_GUIDANCE.to_string());
    }

    if format_issue {
        suggestions.push(FORMAT_GUIDANCE.to_string());
    }

    if let Some(example) = example_message(commit) {
        suggestions.push(example);
    }

    suggestions
}

/// Builds `Example: type(scope): description` with a best-effort imperative
/// rewrite of the first word.
fn example_message(commit: &ParsedCommit) -> Option<String> {
    if commit.commit_type.is_empty() || commit.description.is_empty() {
        return None;
    }

    let header = if commit.scope.is_empty() {
        format!("{}: ", commit.commit_type)
    } else {
        format!("{}({}): ", commit.commit_type, commit.scope)
    };

    Some(format!(
        "Example: {header}{}",
        imperative_description(&commit.description)
    ))
}

fn imperative_description(description: &str) -> String {
    let mut words = description.split_whitespace();
    let Some(first) = words.next() else {
        return description.to_string();
    };

    let first = first.to_lowercase();
    match first.strip_suffix("ed") {
        Some(stem) => std::iter::once(stem)
            .chain(words)
            .collect::<Vec<_>>()
            .join(" "),
        None => description.to_string(),
    }
}
