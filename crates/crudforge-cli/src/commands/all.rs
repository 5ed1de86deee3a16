//! Implementation of the `crudforge all` command.
//!
//! The original driver's `all` mode: scaffold the workspace first, then
//! generate every entity into it.

use tracing::instrument;

use crate::{
    cli::{AllArgs, GenerateArgs, ProjectArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    manifest::SchemaManifest,
    output::OutputManager,
};

/// Execute the `crudforge all` command.
#[instrument(skip_all)]
pub fn execute(
    args: AllArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // The generate pass targets the workspace the project pass creates, so
    // the project name has to be known up front.
    let manifest_path = super::manifest_path(args.manifest.as_ref());
    let manifest = SchemaManifest::load(&manifest_path)?;
    let base = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.base_path.clone());
    let workspace_root = base.join(&manifest.project.name);

    super::project::execute(
        ProjectArgs {
            manifest: args.manifest.clone(),
            output: args.output.clone(),
            yes: args.yes,
            dry_run: false,
        },
        global.clone(),
        config.clone(),
        output.clone(),
    )?;

    super::generate::execute(
        GenerateArgs {
            manifest: args.manifest,
            output: Some(workspace_root),
            entity: None,
            dry_run: false,
        },
        global,
        config,
        output,
    )
}
