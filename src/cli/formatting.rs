//! Terminal rendering of validation results.
//!
//! Every function returns a `String` so output can be unit tested; commands
//! print the result. Colors are raw ANSI escapes and are omitted entirely when
//! color is disabled.

use std::io::IsTerminal;

use crate::data::check::{CheckSummary, CommitCheckResult, MessageReport};
use crate::lint::{Severity, ValidationResult};
use crate::utils::Settings;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const PURPLE: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";

const RULE_WIDTH: usize = 50;

/// Messages shown when validation fails.
pub(crate) const VALID_EXAMPLES: [&str; 7] = [
    "feat(auth): add login functionality",
    "fix(api): resolve null pointer in user endpoint",
    "docs(readme): update installation instructions",
    "style(css): format button padding",
    "refactor(auth): simplify token validation",
    "test(login): add unit tests for authentication",
    "chore(deps): update dependencies",
];

/// ANSI styling switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    enabled: bool,
}

impl Style {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Decides whether stdout output should be colored.
    pub(crate) fn detect(no_color_flag: bool, settings: &Settings) -> Self {
        Self::new(!no_color_flag && !settings.no_color() && std::io::stdout().is_terminal())
    }

    fn paint(self, codes: &[&str], text: &str) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", codes.concat())
        } else {
            text.to_string()
        }
    }
}

/// Horizontal separator line.
pub(crate) fn separator() -> String {
    "\u{2500}".repeat(RULE_WIDTH)
}

/// Color for a score: green from 80, yellow from 60, red below.
pub(crate) fn score_color(score: u32) -> &'static str {
    if score >= 80 {
        GREEN
    } else if score >= 60 {
        YELLOW
    } else {
        RED
    }
}

/// Icon for a single validation outcome.
pub(crate) fn status_icon(is_valid: bool) -> &'static str {
    if is_valid {
        "\u{2705}"
    } else {
        "\u{274c}"
    }
}

fn severity_icon(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Error => ("\u{274c}", RED),
        Severity::Warning => ("\u{26a0}\u{fe0f}", YELLOW),
    }
}

/// Renders the full report for a single message.
pub(crate) fn render_message_report(report: &MessageReport, style: Style) -> String {
    let parsed = &report.parsed;
    let result = &report.result;
    let mut out = String::new();

    out.push('\n');
    if result.is_valid {
        out.push_str(&style.paint(&[GREEN, BOLD], "\u{2705} COMMIT MESSAGE VALIDATION"));
    } else {
        out.push_str(&style.paint(&[RED, BOLD], "\u{274c} COMMIT MESSAGE VALIDATION FAILED"));
    }
    out.push('\n');
    out.push_str(&separator());
    out.push_str("\n\n");

    out.push_str(&style.paint(&[CYAN, BOLD], "\u{1f4dd} MESSAGE:"));
    out.push('\n');
    out.push_str(&format!("  {}\n\n", parsed.raw.trim_end()));

    out.push_str(&style.paint(&[BLUE, BOLD], "\u{1f50d} PARSED COMPONENTS:"));
    out.push('\n');
    if parsed.commit_type.is_empty() {
        out.push_str(&format!("  Type:        {}\n", style.paint(&[RED], "Missing")));
    } else {
        out.push_str(&format!(
            "  Type:        {}\n",
            style.paint(&[GREEN], &parsed.commit_type)
        ));
    }
    if parsed.scope.is_empty() {
        out.push_str(&format!("  Scope:       {}\n", style.paint(&[GRAY], "(optional)")));
    } else {
        out.push_str(&format!("  Scope:       {}\n", style.paint(&[GRAY], &parsed.scope)));
    }
    if !parsed.description.is_empty() {
        out.push_str(&format!(
            "  Description: {}\n",
            style.paint(&[GRAY], &parsed.description)
        ));
        out.push_str(&format!(
            "  Length:      {} chars\n",
            parsed.description.chars().count()
        ));
    }
    if parsed.is_breaking {
        out.push_str(&format!(
            "  Breaking:    {}\n",
            style.paint(&[YELLOW], "\u{26a0}\u{fe0f}  BREAKING CHANGE")
        ));
    }
    out.push('\n');

    out.push_str(&render_validation_summary(result, style));

    if !result.violations.is_empty() {
        out.push_str(&style.paint(&[YELLOW, BOLD], "\u{26a0}\u{fe0f}  ISSUES FOUND:"));
        out.push('\n');
        for violation in &result.violations {
            let (icon, color) = severity_icon(violation.severity);
            out.push_str(&format!(
                "  {icon} {}\n",
                style.paint(&[color], &violation.message)
            ));
        }
        out.push('\n');
    }

    if !result.suggestions.is_empty() {
        out.push_str(&style.paint(&[GREEN, BOLD], "\u{1f4a1} SUGGESTIONS:"));
        out.push('\n');
        for suggestion in &result.suggestions {
            out.push_str(&format!("  \u{2022} {suggestion}\n"));
        }
        out.push('\n');
    }

    if !result.is_valid {
        out.push_str(&style.paint(&[BLUE, BOLD], "\u{1f4da} VALID EXAMPLES:"));
        out.push('\n');
        for example in VALID_EXAMPLES {
            out.push_str(&format!("  \u{2022} {example}\n"));
        }
        out.push('\n');
    }

    out.push_str(&separator());
    out.push('\n');
    if result.is_valid {
        out.push_str(&style.paint(&[GREEN, BOLD], "\u{2705} Ready to commit!"));
    } else {
        out.push_str(&style.paint(
            &[RED, BOLD],
            "\u{274c} Please fix the issues above before committing.",
        ));
    }
    out.push('\n');

    out
}

fn render_validation_summary(result: &ValidationResult, style: Style) -> String {
    let mut out = String::new();

    out.push_str(&style.paint(&[PURPLE, BOLD], "\u{1f4ca} VALIDATION SUMMARY:"));
    out.push('\n');
    let status = if result.is_valid {
        style.paint(&[GREEN], "PASS")
    } else {
        style.paint(&[RED], "FAIL")
    };
    out.push_str(&format!("  Status:      {status}\n"));
    out.push_str(&format!(
        "  Score:       {}\n",
        style.paint(&[score_color(result.score)], &format!("{}/100", result.score))
    ));

    let errors = result.error_count();
    let warnings = result.warning_count();
    if errors > 0 {
        out.push_str(&format!(
            "  Errors:      {}\n",
            style.paint(&[RED], &errors.to_string())
        ));
    }
    if warnings > 0 {
        out.push_str(&format!(
            "  Warnings:    {}\n",
            style.paint(&[YELLOW], &warnings.to_string())
        ));
    }
    out.push('\n');

    out
}

/// Renders the detailed block used when validating the last N commits.
pub(crate) fn render_commit_detail(
    position: usize,
    total: usize,
    commit: &CommitCheckResult,
    style: Style,
) -> String {
    let result = &commit.result;
    let status = if result.is_valid {
        format!("\u{2705} Valid ({}/100)", result.score)
    } else {
        format!("\u{274c} Invalid ({}/100)", result.score)
    };

    format!(
        "[{position}/{total}] Commit: {}\n     Message: {}\n     Author:  {}\n     Date:    {}\n     Status:  {}\n",
        commit.short_hash,
        commit.subject,
        commit.author,
        commit.date,
        style.paint(&[score_color(result.score)], &status),
    )
}

/// Renders the one-line form used when validating a range.
pub(crate) fn render_commit_line(commit: &CommitCheckResult) -> String {
    format!(
        "{} [{}] {} - {}",
        status_icon(commit.result.is_valid),
        commit.short_hash,
        commit.date,
        commit.subject
    )
}

/// Renders the summary printed after a batch of commits.
pub(crate) fn render_summary(summary: &CheckSummary, style: Style) -> String {
    let mut out = String::new();

    out.push_str(&separator());
    out.push('\n');
    out.push_str(&style.paint(
        &[BOLD],
        &format!("\u{1f4c8} SUMMARY ({} commits):", summary.total_commits),
    ));
    out.push('\n');
    out.push_str(&format!(
        "   Valid: {}/{} ({:.0}%)\n",
        summary.valid_commits,
        summary.total_commits,
        summary.valid_percentage()
    ));
    out.push_str(&format!(
        "   Average score: {}\n",
        style.paint(
            &[score_color(summary.average_score)],
            &format!("{}/100", summary.average_score)
        )
    ));

    if summary.invalid_commits == 0 {
        out.push_str(&style.paint(
            &[GREEN, BOLD],
            &format!("\u{2705} All {} commits are valid!", summary.total_commits),
        ));
    } else {
        out.push_str(&style.paint(&[RED, BOLD], "\u{274c} Some commits failed validation"));
    }
    out.push('\n');

    out
}
