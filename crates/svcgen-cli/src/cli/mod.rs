//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.  There are no subcommands:
//! the one thing svcgen does is generate a service.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a new microservice",
    long_about = "svcgen generates a ready-to-develop microservice skeleton \
                  (Fastify/TypeScript layout, Dockerfile, migrations) from a \
                  fixed template set, then optionally initializes git.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen order-service\n\
        \x20 svcgen order-service --output-dir ./services\n\
        \x20 svcgen payments --skip-git -v"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the microservice to generate.
    ///
    /// Alphanumeric characters and hyphens only; it becomes the directory
    /// name, the package name, and the docker image tag.
    #[arg(value_name = "SERVICE_NAME", help = "Name of the microservice")]
    pub service_name: String,

    /// Destination parent directory; created if absent.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory where the microservice is created"
    )]
    pub output_dir: PathBuf,

    /// Skip git repository initialization.
    #[arg(long = "skip-git", help = "Skip git repository initialization")]
    pub skip_git: bool,

    /// Use templates from a specific directory instead of the resolved one.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Use templates from this directory"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_minimal_invocation() {
        let cli = Cli::parse_from(["svcgen", "order-service"]);
        assert_eq!(cli.service_name, "order-service");
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.skip_git);
        assert_eq!(cli.global.verbose, 0);
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::parse_from([
            "svcgen",
            "payments",
            "-o",
            "/tmp/out",
            "--skip-git",
            "-vv",
        ]);
        assert_eq!(cli.service_name, "payments");
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
        assert!(cli.skip_git);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn service_name_is_required() {
        assert!(Cli::try_parse_from(["svcgen"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["svcgen", "--quiet", "--verbose", "x"]).is_err());
    }

    #[test]
    fn template_dir_is_optional() {
        let cli = Cli::parse_from(["svcgen", "x", "--template-dir", "/tpl"]);
        assert_eq!(cli.template_dir, Some(PathBuf::from("/tpl")));
    }
}
