//! Template directory resolution.
//!
//! The renderer needs a directory of template files. Resolution order,
//! first hit wins:
//!
//! 1. **Explicit override** — `--template-dir` flag or config file entry.
//!    Must exist; an explicit path that is missing is an error, not a
//!    fall-through.
//! 2. **`$SVCGEN_TEMPLATES_DIR`** — environment variable override. Set this
//!    in `.env` or your shell profile to point at a custom template set.
//! 3. **`./templates`** — relative to the current working directory.
//! 4. **`<executable-dir>/templates`** — sibling to the `svcgen` binary.
//!    Useful when the binary is installed into `/usr/local/bin` alongside a
//!    `templates/` directory.
//! 5. **Embedded built-ins** — extracted into the user cache dir and used
//!    from there, so a bare binary works out of the box.

use std::path::{Path, PathBuf};

use svcgen_core::{application::ApplicationError, error::SvcgenResult};
use tracing::{debug, info};

use crate::builtin_templates::write_builtin_templates;

/// Environment variable overriding the template directory.
pub const TEMPLATES_DIR_ENV: &str = "SVCGEN_TEMPLATES_DIR";

/// Resolve the template directory for this process.
pub fn resolve(override_dir: Option<&Path>) -> SvcgenResult<PathBuf> {
    if let Some(dir) = override_dir {
        if !dir.is_dir() {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "template directory does not exist".into(),
            }
            .into());
        }
        info!(path = %dir.display(), "Using template directory from override");
        return Ok(dir.to_path_buf());
    }

    for candidate in candidate_paths() {
        debug!(path = %candidate.display(), "checking candidate templates path");
        if candidate.is_dir() {
            info!(path = %candidate.display(), "Using template directory");
            return Ok(candidate);
        }
    }

    let cache = cache_templates_dir();
    write_builtin_templates(&cache)?;
    info!(path = %cache.display(), "Using embedded templates");
    Ok(cache)
}

/// Build the ordered list of candidate paths to probe.
///
/// Only entries that can be constructed are returned; a missing env var or
/// an unresolvable exe path is silently omitted.
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from("templates"));

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("templates"));
    }

    paths
}

/// Where the embedded templates get extracted to.
fn cache_templates_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "svcgen", "svcgen")
        .map(|d| d.cache_dir().join("templates"))
        .unwrap_or_else(|| PathBuf::from(".svcgen-templates"))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn explicit_override_wins() {
        let tmp = tempdir().unwrap();
        let resolved = resolve(Some(tmp.path())).unwrap();
        assert_eq!(resolved, tmp.path());
    }

    #[test]
    fn missing_override_is_an_error() {
        let tmp = tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert!(resolve(Some(&missing)).is_err());
    }

    #[test]
    fn candidates_include_cwd_templates() {
        assert!(
            candidate_paths()
                .iter()
                .any(|p| p == Path::new("templates"))
        );
    }
}
