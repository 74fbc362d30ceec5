//! Git adapter: repository initialization via the `git` binary.
//!
//! Shells out to git with no output parsing beyond success/failure. The
//! command sequence runs inside the repository root via a scoped working
//! directory change that is restored on every exit path, including early
//! error returns.

use std::path::{Path, PathBuf};
use std::process::Command;

use svcgen_core::{
    application::{ApplicationError, ports::VersionControl},
    error::SvcgenResult,
};
use tracing::{debug, info, warn};

/// Version-control adapter backed by the `git` executable.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitVersionControl;

impl GitVersionControl {
    /// Create a new git adapter.
    pub fn new() -> Self {
        Self
    }
}

impl VersionControl for GitVersionControl {
    fn is_available(&self) -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    fn initialize(&self, repo_root: &Path, message: &str) -> SvcgenResult<()> {
        let _cwd = CwdGuard::enter(repo_root)?;

        run_git(&["init"])?;
        run_git(&["add", "."])?;
        run_git(&["commit", "-m", message])?;

        info!(path = %repo_root.display(), "Git repository initialized");
        Ok(())
    }
}

/// Run one git command in the current directory, mapping any failure to a
/// version-control error.
fn run_git(args: &[&str]) -> SvcgenResult<()> {
    debug!(command = %format!("git {}", args.join(" ")), "Running");

    let output = Command::new("git").args(args).output().map_err(|e| {
        ApplicationError::VersionControlFailed {
            reason: format!("failed to run git {}: {}", args.join(" "), e),
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ApplicationError::VersionControlFailed {
            reason: format!("git {} failed: {}", args.join(" "), stderr.trim()),
        }
        .into());
    }

    Ok(())
}

/// Scoped change of the process working directory.
///
/// The previous directory is captured on entry and restored on drop, so the
/// caller's working directory is intact no matter how the git sequence ends.
struct CwdGuard {
    prev: PathBuf,
}

impl CwdGuard {
    fn enter(dir: &Path) -> SvcgenResult<Self> {
        let prev = std::env::current_dir().map_err(|e| {
            ApplicationError::VersionControlFailed {
                reason: format!("failed to capture working directory: {e}"),
            }
        })?;
        std::env::set_current_dir(dir).map_err(|e| {
            ApplicationError::VersionControlFailed {
                reason: format!("failed to enter {}: {}", dir.display(), e),
            }
        })?;
        Ok(Self { prev })
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.prev) {
            warn!(error = %e, "Failed to restore working directory");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // These tests mutate the process working directory; run them one at a time.
    static CWD_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn cwd_guard_restores_on_drop() {
        let _serial = CWD_LOCK.lock().unwrap();
        let before = std::env::current_dir().unwrap();
        let tmp = TempDir::new().unwrap();

        {
            let _guard = CwdGuard::enter(tmp.path()).unwrap();
            // Canonicalize: macOS tempdirs live behind /private symlinks.
            assert_eq!(
                std::env::current_dir().unwrap().canonicalize().unwrap(),
                tmp.path().canonicalize().unwrap()
            );
        }

        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn initialize_restores_cwd_even_on_failure() {
        if !GitVersionControl::new().is_available() {
            return;
        }

        let _serial = CWD_LOCK.lock().unwrap();
        let before = std::env::current_dir().unwrap();
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("file.txt"), "content").unwrap();

        // Commit may fail (e.g. no identity configured); either way the
        // working directory must come back.
        let _ = GitVersionControl::new().initialize(tmp.path(), "initial");
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn initialize_creates_a_repository() {
        if !GitVersionControl::new().is_available() {
            return;
        }

        let _serial = CWD_LOCK.lock().unwrap();
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("file.txt"), "content").unwrap();

        let _ = GitVersionControl::new().initialize(tmp.path(), "initial");
        assert!(tmp.path().join(".git").exists());
    }
}
