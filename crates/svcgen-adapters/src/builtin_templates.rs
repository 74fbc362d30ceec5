//! Built-in templates embedded in the binary.
//!
//! The shipped template set lives in this crate's `templates/` directory and
//! is compiled in via `include_str!`. [`write_builtin_templates`] seeds a
//! directory with them, which is how the CLI bootstraps a usable template
//! root when none is found on disk (see [`crate::template_dir`]).

use std::path::Path;

use svcgen_core::{application::ApplicationError, error::SvcgenResult};
use tracing::debug;

/// Every template that ships with svcgen, as `(file name, content)` pairs.
pub const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("gitignore.tmpl", include_str!("../templates/gitignore.tmpl")),
    (
        "tsconfig.json.tmpl",
        include_str!("../templates/tsconfig.json.tmpl"),
    ),
    (
        "package.json.tmpl",
        include_str!("../templates/package.json.tmpl"),
    ),
    ("Dockerfile.tmpl", include_str!("../templates/Dockerfile.tmpl")),
    (
        "env.example.tmpl",
        include_str!("../templates/env.example.tmpl"),
    ),
    ("app.ts.tmpl", include_str!("../templates/app.ts.tmpl")),
    ("config.ts.tmpl", include_str!("../templates/config.ts.tmpl")),
    (
        "errorHandler.ts.tmpl",
        include_str!("../templates/errorHandler.ts.tmpl"),
    ),
    (
        "sanitizer.ts.tmpl",
        include_str!("../templates/sanitizer.ts.tmpl"),
    ),
    ("plugins.ts.tmpl", include_str!("../templates/plugins.ts.tmpl")),
    (
        "routes-index.ts.tmpl",
        include_str!("../templates/routes-index.ts.tmpl"),
    ),
    (
        "health-routes.ts.tmpl",
        include_str!("../templates/health-routes.ts.tmpl"),
    ),
    ("migrate.ts.tmpl", include_str!("../templates/migrate.ts.tmpl")),
    (
        "001_initial_schema.sql.tmpl",
        include_str!("../templates/001_initial_schema.sql.tmpl"),
    ),
];

/// Seed `dir` with the embedded templates.
///
/// Existing files are left alone so local edits to an extracted set survive
/// upgrades.
pub fn write_builtin_templates(dir: &Path) -> SvcgenResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ApplicationError::FilesystemError {
        path: dir.to_path_buf(),
        reason: format!("Failed to create directory: {e}"),
    })?;

    for (name, content) in BUILTIN_TEMPLATES {
        let path = dir.join(name);
        if path.exists() {
            continue;
        }
        std::fs::write(&path, content).map_err(|e| ApplicationError::FilesystemError {
            path: path.clone(),
            reason: format!("Failed to write template: {e}"),
        })?;
        debug!(path = %path.display(), "Extracted built-in template");
    }

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use svcgen_core::domain::FILE_MANIFEST;
    use tempfile::tempdir;

    #[test]
    fn every_manifest_template_ships_builtin() {
        let names: HashSet<&str> = BUILTIN_TEMPLATES.iter().map(|(n, _)| *n).collect();
        for entry in FILE_MANIFEST {
            assert!(
                names.contains(entry.template),
                "manifest references template with no built-in: {}",
                entry.template
            );
        }
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut seen = HashSet::new();
        for (name, _) in BUILTIN_TEMPLATES {
            assert!(seen.insert(name), "duplicate built-in: {name}");
        }
    }

    #[test]
    fn builtins_only_use_known_variables() {
        // Literal substitution must leave no placeholder behind.
        use svcgen_core::domain::TemplateVars;
        let vars = TemplateVars::new("widget");
        for (name, content) in BUILTIN_TEMPLATES {
            let mut rendered = content.to_string();
            for (key, value) in vars.pairs() {
                rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
            }
            assert!(
                !rendered.contains("{{"),
                "unknown placeholder left in {name}"
            );
        }
    }

    #[test]
    fn write_extracts_all_and_preserves_existing() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("gitignore.tmpl"), "mine").unwrap();

        write_builtin_templates(tmp.path()).unwrap();

        for (name, _) in BUILTIN_TEMPLATES {
            assert!(tmp.path().join(name).exists(), "not extracted: {name}");
        }
        assert_eq!(
            std::fs::read_to_string(tmp.path().join("gitignore.tmpl")).unwrap(),
            "mine"
        );
    }
}
