//! Log command: validates commit messages already in history.

use anyhow::{Context, Result};
use clap::Parser;

use super::formatting::{render_commit_detail, render_commit_line, render_summary, Style};
use super::resolve_output_format;
use crate::data::{render_structured, CheckReport};
use crate::git::GitRepository;
use crate::utils::Settings;

/// Log command options.
#[derive(Parser)]
pub struct LogCommand {
    /// Number of commits to validate, starting from HEAD.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Commit range to validate (e.g., HEAD~3..HEAD).
    #[arg(long, value_name = "FROM..TO", conflicts_with = "count")]
    pub range: Option<String>,

    /// Output format: text, json, yaml (defaults to COMMIT_LINT_FORMAT or text).
    #[arg(long)]
    pub format: Option<String>,

    /// Disables colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl LogCommand {
    /// Executes the log command, exiting with status 1 when any commit is invalid.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load()?;
        let format = resolve_output_format(self.format.as_deref(), &settings)?;
        let style = Style::detect(self.no_color, &settings);
        let text = format == crate::data::OutputFormat::Text;

        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;

        let commits = match &self.range {
            Some(range) => {
                if text {
                    println!("\u{1f4ca} Validating commits in range: {range}...\n");
                }
                repo.get_commits_in_range(range)
                    .context("Failed to get commits")?
            }
            None => {
                if text {
                    println!("\u{1f4ca} Validating last {} commit(s)...\n", self.count);
                }
                repo.get_recent_commits(self.count as usize)
                    .context("Failed to get commits")?
            }
        };

        let report = CheckReport::from_commits(&commits);

        if let Some(rendered) = render_structured(&report, format)? {
            println!("{rendered}");
        } else if report.commits.is_empty() {
            println!("\u{2139}\u{fe0f}  No commits found in the specified range");
            return Ok(());
        } else {
            self.output_text_report(&report, style);
        }

        let exit_code = report.exit_code();
        if exit_code != 0 {
            std::process::exit(exit_code);
        }

        Ok(())
    }

    fn output_text_report(&self, report: &CheckReport, style: Style) {
        let total = report.commits.len();

        if self.range.is_some() {
            for commit in &report.commits {
                println!("{}", render_commit_line(commit));
            }
        } else {
            for (i, commit) in report.commits.iter().enumerate() {
                print!("{}", render_commit_detail(i + 1, total, commit, style));
                if i + 1 < total {
                    println!();
                }
            }
        }

        println!();
        print!("{}", render_summary(&report.summary, style));
    }
}
