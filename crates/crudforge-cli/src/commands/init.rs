//! `crudforge init` — create a starter schema manifest.

use std::path::PathBuf;

use crate::{
    cli::{DEFAULT_MANIFEST, InitArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    manifest::SchemaManifest,
    output::OutputManager,
};

/// Write the starter manifest into the current directory.
pub fn execute(args: InitArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising schema manifest...")?;

    let path = PathBuf::from(DEFAULT_MANIFEST);

    // Bail early if the file already exists and --force was not given.
    if path.exists() && !args.force {
        output.warning(&format!(
            "Manifest already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    std::fs::write(&path, SchemaManifest::sample()).map_err(|e| CliError::IoError {
        message: format!("Failed to write manifest to '{}'", path.display()),
        source: e,
    })?;

    output.success(&format!("Manifest created at {}", path.display()))?;
    output.print("Next: crudforge generate")?;

    Ok(())
}
