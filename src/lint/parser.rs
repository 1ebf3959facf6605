//! Commit message parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Marker placed directly before the colon to flag a breaking change.
const BREAKING_MARKER: &str = "!:";

// Header patterns, matched against the first line only
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^)]+)\))?!?: (?P<desc>.+)$").unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SIMPLE_HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<type>[A-Za-z0-9_]+): (?P<desc>.+)$").unwrap());

/// Structured view of a commit message.
///
/// Empty `commit_type` and `description` together mean the header could not
/// be parsed at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The message exactly as supplied.
    pub raw: String,
    /// Commit type such as `feat` or `fix`.
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Optional scope from `type(scope):`, empty when absent.
    pub scope: String,
    /// Header text after `": "`.
    pub description: String,
    /// Text after the first blank line.
    pub body: String,
    /// Whether the header carried `!` directly before the colon.
    pub is_breaking: bool,
}

impl ParsedCommit {
    /// Returns true when a type and description were extracted.
    pub fn is_parsed(&self) -> bool {
        !(self.commit_type.is_empty() && self.description.is_empty())
    }
}

/// Parses a commit message. Never fails: unparseable input comes back with
/// empty `commit_type` and `description`.
pub fn parse(raw: &str) -> ParsedCommit {
    let mut commit = ParsedCommit {
        raw: raw.to_string(),
        ..ParsedCommit::default()
    };

    let mut message = raw.trim().to_string();

    if message.contains(BREAKING_MARKER) {
        commit.is_breaking = true;
        message = message.replacen(BREAKING_MARKER, ":", 1);
    }

    let header = message.lines().next().unwrap_or_default();

    if let Some(caps) = HEADER_PATTERN.captures(header) {
        commit.commit_type = caps["type"].to_string();
        commit.scope = caps
            .name("scope")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        commit.description = caps["desc"].to_string();

        if let Some((_, body)) = message.split_once("\n\n") {
            commit.body = body.to_string();
        }
    } else if let Some(caps) = SIMPLE_HEADER_PATTERN.captures(header) {
        commit.commit_type = caps["type"].to_string();
        commit.description = caps["desc"].to_string();
    }

    commit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_scope_and_description() {
        let commit = parse("feat(auth): add login functionality");
        assert_eq!(commit.commit_type, "feat");
        assert_eq!(commit.scope, "auth");
        assert_eq!(commit.description, "add login functionality");
        assert!(commit.body.is_empty());
        assert!(!commit.is_breaking);
        assert!(commit.is_parsed());
    }

    #[test]
    fn scope_is_optional() {
        let commit = parse("fix: handle empty input");
        assert_eq!(commit.commit_type, "fix");
        assert_eq!(commit.scope, "");
        assert_eq!(commit.description, "handle empty input");
    }

    #[test]
    fn description_keeps_further_colons() {
        let commit = parse("docs: note: the API changed: twice");
        assert_eq!(commit.description, "note: the API changed: twice");
    }

    #[test]
    fn body_follows_first_blank_line() {
        let commit = parse("feat(api): add endpoint\n\nFirst paragraph.\n\nSecond paragraph.\n");
        assert_eq!(commit.description, "add endpoint");
        assert_eq!(commit.body, "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn raw_is_preserved_untrimmed() {
        let raw = "  chore: bump version  \n";
        let commit = parse(raw);
        assert_eq!(commit.raw, raw);
        assert_eq!(commit.description, "bump version");
    }

    #[test]
    fn breaking_marker_is_detected_and_stripped() {
        let commit = parse("feat!: remove old api");
        assert!(commit.is_breaking);
        assert_eq!(commit.commit_type, "feat");
        assert_eq!(commit.description, "remove old api");
    }

    #[test]
    fn breaking_marker_with_scope() {
        let commit = parse("refactor(core)!: drop legacy config");
        assert!(commit.is_breaking);
        assert_eq!(commit.commit_type, "refactor");
        assert_eq!(commit.scope, "core");
        assert_eq!(commit.description, "drop legacy config");
    }

    #[test]
    fn only_first_breaking_marker_is_replaced() {
        let commit = parse("feat!: keep this !: intact");
        assert!(commit.is_breaking);
        assert_eq!(commit.description, "keep this !: intact");
    }

    #[test]
    fn breaking_marker_without_header_still_fails() {
        let commit = parse("just words !:");
        assert!(commit.is_breaking);
        assert!(!commit.is_parsed());
    }

    #[test]
    fn type_is_case_sensitive() {
        let commit = parse("Feat: x");
        assert_eq!(commit.commit_type, "Feat");
        assert_eq!(commit.description, "x");
    }

    #[test]
    fn missing_colon_fails() {
        let commit = parse("fixed bug");
        assert!(!commit.is_parsed());
        assert_eq!(commit.raw, "fixed bug");
        assert!(!commit.is_breaking);
    }

    #[test]
    fn missing_space_after_colon_fails() {
        assert!(!parse("feat:add thing").is_parsed());
    }

    #[test]
    fn empty_scope_fails() {
        assert!(!parse("feat(): add thing").is_parsed());
    }

    #[test]
    fn empty_input_fails() {
        let commit = parse("");
        assert!(!commit.is_parsed());
        assert_eq!(commit, ParsedCommit::default());
    }

    #[test]
    fn crlf_does_not_leak_into_description() {
        let commit = parse("fix: trim carriage returns\r\n\r\nbody");
        assert_eq!(commit.description, "trim carriage returns");
    }

    #[test]
    fn type_stops_at_non_word_character() {
        assert!(!parse("feat-x: add thing").is_parsed());
        assert!(!parse("feat x: add thing").is_parsed());
    }
}
