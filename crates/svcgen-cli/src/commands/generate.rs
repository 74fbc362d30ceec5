//! Implementation of the generation command.
//!
//! Responsibility: translate CLI arguments into a configured
//! `ServiceScaffolder`, run it, and display results.  No business logic
//! lives here.

use tracing::{debug, info, instrument};

use svcgen_adapters::{GitVersionControl, LocalFilesystem, select_renderer, template_dir};
use svcgen_core::{application::ServiceScaffolder, domain::validate_service_name};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the generation command.
///
/// Dispatch sequence:
/// 1. Validate the service name (before any side effect)
/// 2. Ensure the output directory exists
/// 3. Resolve the template directory and build the adapters
/// 4. Run the scaffolder
/// 5. Print success + next-steps guidance
#[instrument(skip_all, fields(service = %cli.service_name))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Validate before anything touches the disk.
    validate_service_name(&cli.service_name)
        .map_err(|e| CliError::Core(e.into()))?;

    // 2. Destination parent directory, created if absent.
    if !cli.output_dir.exists() {
        debug!(path = %cli.output_dir.display(), "Creating output directory");
        std::fs::create_dir_all(&cli.output_dir)?;
    }

    // 3. Template root + adapters.  The renderer strategy is fixed here,
    //    once, and injected; the scaffolder never knows which one it got.
    let template_override = cli
        .template_dir
        .as_deref()
        .or(config.templates.template_dir.as_deref());
    let template_root = template_dir::resolve(template_override).map_err(CliError::Core)?;

    let scaffolder = ServiceScaffolder::new(
        &cli.service_name,
        &cli.output_dir,
        cli.skip_git,
        Box::new(LocalFilesystem::new()),
        select_renderer(template_root),
        Box::new(GitVersionControl::new()),
    )
    .map_err(CliError::Core)?;

    // 4. Generate.
    output.header(&format!("Creating '{}'...", cli.service_name))?;
    info!(path = %scaffolder.service_dir().display(), "Generation started");

    scaffolder.generate().map_err(CliError::Core)?;

    // 5. Success + next steps.
    output.success(&format!(
        "{} service created successfully",
        cli.service_name
    ))?;
    output.print(&scaffolder.next_steps())?;

    Ok(())
}
