//! Fixed generation manifests.
//!
//! Both lists are compile-time constants: the set of directories and files a
//! service is made of does not vary at runtime and is not user-configurable.
//! Order matters for sequencing only (directories exist before the files
//! inside them are written), not for output correctness.

/// One file to materialize: where it goes and which template produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Output path relative to the service root.
    pub path: &'static str,
    /// Template file name under the template root.
    pub template: &'static str,
}

/// Directories created under the service root before any file write.
pub const SERVICE_DIRS: &[&str] = &[
    "src/data-access",
    "src/models",
    "src/routes",
    "src/schemas",
    "src/utils",
    "src/db/migrations",
    "src/plugins",
    "docs",
    "scripts",
];

/// Files generated from templates, in generation order: root-level
/// config/metadata files, then source files, then db migration files.
pub const FILE_MANIFEST: &[ManifestEntry] = &[
    // Root files
    ManifestEntry {
        path: ".gitignore",
        template: "gitignore.tmpl",
    },
    ManifestEntry {
        path: "tsconfig.json",
        template: "tsconfig.json.tmpl",
    },
    ManifestEntry {
        path: "package.json",
        template: "package.json.tmpl",
    },
    ManifestEntry {
        path: "Dockerfile",
        template: "Dockerfile.tmpl",
    },
    ManifestEntry {
        path: ".env.example",
        template: "env.example.tmpl",
    },
    // Source files
    ManifestEntry {
        path: "src/app.ts",
        template: "app.ts.tmpl",
    },
    ManifestEntry {
        path: "src/config.ts",
        template: "config.ts.tmpl",
    },
    ManifestEntry {
        path: "src/utils/errorHandler.ts",
        template: "errorHandler.ts.tmpl",
    },
    ManifestEntry {
        path: "src/utils/sanitizer.ts",
        template: "sanitizer.ts.tmpl",
    },
    ManifestEntry {
        path: "src/plugins/index.ts",
        template: "plugins.ts.tmpl",
    },
    ManifestEntry {
        path: "src/routes/index.ts",
        template: "routes-index.ts.tmpl",
    },
    ManifestEntry {
        path: "src/routes/health.ts",
        template: "health-routes.ts.tmpl",
    },
    // DB migration files
    ManifestEntry {
        path: "src/db/migrate.ts",
        template: "migrate.ts.tmpl",
    },
    ManifestEntry {
        path: "src/db/migrations/001_initial_schema.sql",
        template: "001_initial_schema.sql.tmpl",
    },
];

// ── tests ─────────────────────────────────────────────────────────────────────
