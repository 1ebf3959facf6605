//! CLI interface for commit-lint.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::data::OutputFormat;
use crate::utils::Settings;

pub mod check;
pub(crate) mod formatting;
pub mod hook;
pub mod log;

pub use check::CheckCommand;
pub use hook::HookCommand;
pub use log::LogCommand;

/// commit-lint: Conventional Commits validation.
#[derive(Parser)]
#[command(name = "commit-lint")]
#[command(
    about = "Validates commit messages against Conventional Commits",
    long_about = None,
    after_help = "Learn more: https://www.conventionalcommits.org/"
)]
#[command(version)]
pub struct Cli {
    /// The main command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Main command categories.
#[derive(Subcommand)]
pub enum Commands {
    /// Validates a commit message.
    Check(CheckCommand),
    /// Manages the Git commit-msg hook.
    Hook(HookCommand),
    /// Validates commits already in history.
    Log(LogCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check(check_cmd) => check_cmd.execute(),
            Commands::Hook(hook_cmd) => hook_cmd.execute(),
            Commands::Log(log_cmd) => log_cmd.execute(),
        }
    }
}

/// Picks the output format from `--format`, then settings, then text.
pub(crate) fn resolve_output_format(flag: Option<&str>, settings: &Settings) -> Result<OutputFormat> {
    match flag.map(str::to_string).or_else(|| settings.output_format()) {
        Some(value) => value.parse().map_err(|e: String| anyhow!(e)),
        None => Ok(OutputFormat::default()),
    }
}
