//! Hook commands: install, uninstall and inspect the commit-msg hook.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::git::{GitRepository, HookManager, HookStatus, InstallOutcome};

/// commit-msg hook management.
#[derive(Parser)]
pub struct HookCommand {
    /// Hook subcommand to execute.
    #[command(subcommand)]
    pub command: HookSubcommands,
}

/// Hook subcommands.
#[derive(Subcommand)]
pub enum HookSubcommands {
    /// Installs the commit-msg hook.
    Install(InstallCommand),
    /// Removes the commit-msg hook.
    Uninstall,
    /// Reports whether the commit-msg hook is installed.
    Status,
}

/// Install command options.
#[derive(Parser)]
pub struct InstallCommand {
    /// Overwrites an existing hook written by another tool (it is backed up).
    #[arg(long)]
    pub force: bool,
}

impl HookCommand {
    /// Executes the hook command.
    pub fn execute(self) -> Result<()> {
        let repo = GitRepository::open()
            .context("Failed to open git repository. Make sure you're in a git repository.")?;
        let manager = HookManager::new(repo.hooks_dir());

        match self.command {
            HookSubcommands::Install(install_cmd) => install_cmd.execute(&manager),
            HookSubcommands::Uninstall => uninstall(&manager),
            HookSubcommands::Status => status(&manager),
        }
    }
}

impl InstallCommand {
    /// Installs the hook through `manager`.
    pub fn execute(self, manager: &HookManager) -> Result<()> {
        println!("\u{1f527} Installing Git commit-msg hook...");
        println!();

        match manager
            .install(self.force)
            .context("Failed to install hook")?
        {
            InstallOutcome::Installed => {}
            InstallOutcome::Updated => println!("\u{2139}\u{fe0f}  Existing commit-lint hook updated"),
            InstallOutcome::Replaced { backup } => {
                println!("\u{2139}\u{fe0f}  Previous hook saved to {}", backup.display());
            }
        }

        println!("\u{2705} Hook installed successfully!");
        println!();
        println!("From now on, all commit messages will be automatically validated.");
        println!();
        println!("To test the hook:");
        println!("  git commit -m \"test message\"  # Should fail validation");
        println!("  git commit -m \"feat: add feature\"  # Should pass");
        Ok(())
    }
}

fn uninstall(manager: &HookManager) -> Result<()> {
    println!("\u{1f527} Uninstalling Git commit-msg hook...");

    let restored = manager.uninstall().context("Failed to uninstall hook")?;
    if restored {
        println!("\u{2139}\u{fe0f}  Previous hook restored");
    }

    println!("\u{2705} Hook uninstalled successfully!");
    Ok(())
}

fn status(manager: &HookManager) -> Result<()> {
    match manager.status().context("Failed to check hook")? {
        HookStatus::Installed => println!("\u{2705} commit-lint hook is installed"),
        HookStatus::NotInstalled => {
            println!("\u{274c} commit-lint hook is NOT installed");
            println!("   Install with: commit-lint hook install");
        }
        HookStatus::Foreign => {
            println!(
                "\u{274c} A different commit-msg hook is installed at {}",
                manager.hook_path().display()
            );
            println!("   Replace it with: commit-lint hook install --force");
        }
    }
    Ok(())
}
