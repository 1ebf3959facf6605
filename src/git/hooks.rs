//! commit-msg hook management
//!
//! The hook is a small shell script that runs `commit-lint check` against the
//! message file git passes as `$1`. Hooks written by other tools are left
//! alone unless the caller forces an overwrite, in which case the previous
//! hook is kept as `commit-msg.backup` and restored on uninstall.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::GitError;

/// File name of the hook inside the hooks directory.
pub const HOOK_NAME: &str = "commit-msg";

const BACKUP_NAME: &str = "commit-msg.backup";

macro_rules! hook_marker {
    () => {
        "# commit-lint commit-msg hook"
    };
}

/// Marker identifying hooks written by commit-lint.
pub const HOOK_MARKER: &str = hook_marker!();

const HOOK_SCRIPT: &str = concat!(
    "#!/bin/sh\n",
    hook_marker!(),
    r#"
# Validates the commit message against Conventional Commits.
# Bypass with: git commit --no-verify

commit-lint check --file "$1" || exit 1
"#
);

/// State of the commit-msg hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// Our hook is installed.
    Installed,
    /// No commit-msg hook exists.
    NotInstalled,
    /// A commit-msg hook from another tool exists.
    Foreign,
}

/// What `install` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// A fresh hook was written.
    Installed,
    /// Our hook was already present and has been rewritten.
    Updated,
    /// A foreign hook was backed up to the given path and replaced.
    Replaced {
        /// Location of the previous hook.
        backup: PathBuf,
    },
}

/// Manages the commit-msg hook of one repository.
#[derive(Debug, Clone)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Creates a manager for the given hooks directory.
    pub fn new<P: Into<PathBuf>>(hooks_dir: P) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    /// Path of the hook script.
    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(BACKUP_NAME)
    }

    /// Reports whether our hook, a foreign hook or no hook is present.
    pub fn status(&self) -> Result<HookStatus> {
        let hook_path = self.hook_path();
        if !hook_path.exists() {
            return Ok(HookStatus::NotInstalled);
        }

        let content = fs::read_to_string(&hook_path)
            .with_context(|| format!("Failed to read hook: {}", hook_path.display()))?;

        if content.contains(HOOK_MARKER) {
            Ok(HookStatus::Installed)
        } else {
            Ok(HookStatus::Foreign)
        }
    }

    /// Installs the hook.
    ///
    /// A foreign hook is only replaced when `force` is set, and never when
    /// an earlier backup would be overwritten.
    pub fn install(&self, force: bool) -> Result<InstallOutcome> {
        let hook_path = self.hook_path();

        let outcome = match self.status()? {
            HookStatus::NotInstalled => InstallOutcome::Installed,
            HookStatus::Installed => InstallOutcome::Updated,
            HookStatus::Foreign if !force => return Err(GitError::HookExists(hook_path).into()),
            HookStatus::Foreign => {
                let backup = self.backup_path();
                if backup.exists() {
                    return Err(GitError::BackupExists(backup).into());
                }
                fs::copy(&hook_path, &backup).with_context(|| {
                    format!("Failed to back up existing hook to {}", backup.display())
                })?;
                debug!(backup = %backup.display(), "Backed up foreign hook");
                InstallOutcome::Replaced { backup }
            }
        };

        fs::create_dir_all(&self.hooks_dir).with_context(|| {
            format!(
                "Failed to create hooks directory: {}",
                self.hooks_dir.display()
            )
        })?;
        write_executable(&self.hooks_dir, &hook_path, HOOK_SCRIPT)?;

        info!(hook = %hook_path.display(), ?outcome, "Installed commit-msg hook");
        Ok(outcome)
    }

    /// Removes our hook, restoring a backed-up foreign hook if one exists.
    ///
    /// Returns true when a backup was restored.
    pub fn uninstall(&self) -> Result<bool> {
        let hook_path = self.hook_path();

        match self.status()? {
            HookStatus::NotInstalled => return Err(GitError::HookNotInstalled.into()),
            HookStatus::Foreign => return Err(GitError::HookNotOwned(hook_path).into()),
            HookStatus::Installed => {}
        }

        fs::remove_file(&hook_path)
            .with_context(|| format!("Failed to remove hook: {}", hook_path.display()))?;

        let backup = self.backup_path();
        let restored = backup.exists();
        if restored {
            fs::rename(&backup, &hook_path).with_context(|| {
                format!("Failed to restore previous hook from {}", backup.display())
            })?;
        }

        info!(hook = %hook_path.display(), restored, "Uninstalled commit-msg hook");
        Ok(restored)
    }
}

/// Writes `content` to `path` atomically and marks it executable.
fn write_executable(dir: &Path, path: &Path, content: &str) -> Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .context("Failed to write hook script")?;

    // Make executable
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(0o755))
            .context("Failed to set hook permissions")?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to write hook: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::new(dir.path().join("hooks"));
        (dir, manager)
    }

    #[test]
    fn install_into_missing_directory() {
        let (_dir, manager) = manager();
        assert_eq!(manager.status().unwrap(), HookStatus::NotInstalled);

        let outcome = manager.install(false).unwrap();
        assert_eq!(outcome, InstallOutcome::Installed);
        assert_eq!(manager.status().unwrap(), HookStatus::Installed);

        let content = fs::read_to_string(manager.hook_path()).unwrap();
        assert!(content.starts_with("#!/bin/sh"));
        assert!(content.contains(r#"commit-lint check --file "$1""#));
    }

    #[cfg(unix)]
    #[test]
    fn installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        let mode = fs::metadata(manager.hook_path())
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn reinstall_is_idempotent() {
        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        assert_eq!(manager.install(false).unwrap(), InstallOutcome::Updated);
        assert_eq!(manager.status().unwrap(), HookStatus::Installed);
    }

    #[test]
    fn foreign_hook_requires_force() {
        let (_dir, manager) = manager();
        fs::create_dir_all(manager.hook_path().parent().unwrap()).unwrap();
        fs::write(manager.hook_path(), "#!/bin/sh\necho other\n").unwrap();

        assert_eq!(manager.status().unwrap(), HookStatus::Foreign);
        let err = manager.install(false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::HookExists(_))
        ));
        assert_eq!(manager.status().unwrap(), HookStatus::Foreign);
    }

    #[test]
    fn forced_install_backs_up_and_uninstall_restores() {
        let (_dir, manager) = manager();
        fs::create_dir_all(manager.hook_path().parent().unwrap()).unwrap();
        fs::write(manager.hook_path(), "#!/bin/sh\necho other\n").unwrap();

        let outcome = manager.install(true).unwrap();
        assert!(matches!(outcome, InstallOutcome::Replaced { .. }));
        assert_eq!(manager.status().unwrap(), HookStatus::Installed);

        assert!(manager.uninstall().unwrap());
        assert_eq!(
            fs::read_to_string(manager.hook_path()).unwrap(),
            "#!/bin/sh\necho other\n"
        );
    }

    #[test]
    fn script_carries_marker() {
        assert!(HOOK_SCRIPT.starts_with("#!/bin/sh\n"));
        assert!(HOOK_SCRIPT.contains(HOOK_MARKER));
    }

    #[test]
    fn forced_install_keeps_existing_backup() {
        let (_dir, manager) = manager();
        fs::create_dir_all(manager.hook_path().parent().unwrap()).unwrap();
        fs::write(manager.hook_path(), "#!/bin/sh\necho first\n").unwrap();
        manager.install(true).unwrap();

        // Another tool replaces our hook, then we force again.
        fs::write(manager.hook_path(), "#!/bin/sh\necho second\n").unwrap();
        let err = manager.install(true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::BackupExists(_))
        ));

        assert_eq!(
            fs::read_to_string(manager.backup_path()).unwrap(),
            "#!/bin/sh\necho first\n"
        );
        assert_eq!(
            fs::read_to_string(manager.hook_path()).unwrap(),
            "#!/bin/sh\necho second\n"
        );
    }

    #[test]
    fn uninstall_removes_hook() {
        let (_dir, manager) = manager();
        manager.install(false).unwrap();
        assert!(!manager.uninstall().unwrap());
        assert_eq!(manager.status().unwrap(), HookStatus::NotInstalled);
    }

    #[test]
    fn uninstall_without_hook_fails() {
        let (_dir, manager) = manager();
        let err = manager.uninstall().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::HookNotInstalled)
        ));
    }

    #[test]
    fn uninstall_refuses_foreign_hook() {
        let (_dir, manager) = manager();
        fs::create_dir_all(manager.hook_path().parent().unwrap()).unwrap();
        fs::write(manager.hook_path(), "#!/bin/sh\necho other\n").unwrap();

        let err = manager.uninstall().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GitError>(),
            Some(GitError::HookNotOwned(_))
        ));
        assert!(manager.hook_path().exists());
    }
}
