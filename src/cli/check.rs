//! Check command: validates a single commit message.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use super::formatting::{render_message_report, Style};
use super::resolve_output_format;
use crate::data::{render_structured, MessageReport};
use crate::git::{GitError, GitRepository};
use crate::utils::Settings;

/// Check command options.
#[derive(Parser)]
pub struct CheckCommand {
    /// Commit message to validate.
    #[arg(value_name = "MESSAGE", conflicts_with = "file")]
    pub message: Option<String>,

    /// Reads the commit message from a file (e.g. .git/COMMIT_EDITMSG).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format: text, json, yaml (defaults to COMMIT_LINT_FORMAT or text).
    #[arg(long)]
    pub format: Option<String>,

    /// Disables colored output.
    #[arg(long)]
    pub no_color: bool,
}

impl CheckCommand {
    /// Executes the check command, exiting with status 1 when the message is invalid.
    pub fn execute(self) -> Result<()> {
        let settings = Settings::load()?;
        let format = resolve_output_format(self.format.as_deref(), &settings)?;

        let message = self.load_message()?;
        let report = MessageReport::new(&message);

        match render_structured(&report, format)? {
            Some(rendered) => println!("{rendered}"),
            None => {
                let style = Style::detect(self.no_color, &settings);
                print!("{}", render_message_report(&report, style));
                println!();
            }
        }

        if !report.result.is_valid {
            std::process::exit(1);
        }

        Ok(())
    }

    /// Resolves the message from `--file`, the positional argument or the
    /// repository's COMMIT_EDITMSG, in that order.
    fn load_message(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return read_message_file(path);
        }

        if let Some(message) = &self.message {
            return Ok(message.clone());
        }

        let from_repo = GitRepository::open()
            .ok()
            .map(|repo| repo.commit_message_file())
            .filter(|path| path.exists())
            .map(|path| read_message_file(&path))
            .transpose()?
            .filter(|message| !message.trim().is_empty());

        from_repo.ok_or_else(|| GitError::NoCommitMessage.into())
    }
}

fn read_message_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading commit message file");
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(strip_comment_lines(&String::from_utf8_lossy(&bytes)))
}

/// Drops the `#` comment lines git adds to the message template.
fn strip_comment_lines(message: &str) -> String {
    if !message.lines().any(|line| line.starts_with('#')) {
        return message.to_string();
    }

    message
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}
