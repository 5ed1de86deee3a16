//! Implementation of the `crudforge project` command.
//!
//! Drives the declarative workspace plan through the cargo toolchain
//! adapter. Generation of entity artifacts is a separate concern (`generate`
//! / `all`).

use std::path::Path;

use tracing::{info, instrument};

use crudforge_adapters::{CargoToolchain, LocalFilesystem};
use crudforge_core::application::{ProjectPlan, ProjectService, ProjectSpec};

use crate::{
    cli::{ProjectArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    manifest::SchemaManifest,
    output::OutputManager,
};

/// Execute the `crudforge project` command.
#[instrument(skip_all)]
pub fn execute(
    args: ProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest_path = super::manifest_path(args.manifest.as_ref());
    let manifest = SchemaManifest::load(&manifest_path)?;
    let spec = manifest.project.to_spec();
    let base = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.base_path.clone());

    if args.dry_run {
        let plan = ProjectPlan::layered(&spec);
        output.header(&format!("Plan for '{}':", spec.name))?;
        for step in plan
            .execution_order()
            .map_err(|e| CliError::Core(e.into()))?
        {
            output.print(&format!("  {}", step.action))?;
        }
        output.info("Dry run, nothing executed")?;
        return Ok(());
    }

    if !global.quiet && !args.yes {
        show_configuration(&spec, &base, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    let service = ProjectService::new(
        Box::new(CargoToolchain::new()),
        Box::new(LocalFilesystem::new()),
    );

    output.header(&format!("Scaffolding '{}'...", spec.name))?;
    info!(project = %spec.name, "project scaffold started");

    let report = service.scaffold(&spec, &base).map_err(CliError::Core)?;

    info!(project = %spec.name, "project scaffold completed");
    output.success(&format!(
        "Workspace ready at {} ({} steps run, {} skipped)",
        report.root.display(),
        report.executed,
        report.skipped
    ))?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(spec: &ProjectSpec, base: &Path, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:     {}", spec.name))?;
    if !spec.description.is_empty() {
        out.print(&format!("  Description: {}", spec.description))?;
    }
    out.print(&format!("  Dockerfile:  {}", if spec.docker { "yes" } else { "no" }))?;
    out.print(&format!("  Location:    {}", base.display()))?;
    out.print("")?;
    Ok(())
}

pub(crate) fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
