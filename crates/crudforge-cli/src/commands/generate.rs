//! Implementation of the `crudforge generate` command.
//!
//! Responsibility: load the schema manifest, hand each entity schema to the
//! core generation service, and display results. No emission logic lives
//! here.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument};

use crudforge_adapters::LocalFilesystem;
use crudforge_core::{
    application::GenerationService,
    domain::{EntityNames, EntitySchema},
    emit::ArtifactKind,
    error::ForgeError,
};

use crate::{
    cli::{GenerateArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    manifest::SchemaManifest,
    output::OutputManager,
};

/// Execute the `crudforge generate` command.
///
/// Dispatch sequence:
/// 1. Load and convert the schema manifest
/// 2. Narrow to `--entity` if given
/// 3. Early-exit if `--dry-run`
/// 4. Run the generation service per entity
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let manifest_path = super::manifest_path(args.manifest.as_ref());
    let manifest = SchemaManifest::load(&manifest_path)?;
    let schemas = select_entities(&manifest, args.entity.as_deref())?;
    let base = args
        .output
        .clone()
        .unwrap_or_else(|| config.defaults.base_path.clone());

    if args.dry_run {
        return dry_run(&schemas, &base, &output);
    }

    let service = GenerationService::new(Box::new(LocalFilesystem::new()));

    // A bar is only worth drawing across several entities.
    let progress = (!global.quiet && schemas.len() > 1).then(|| {
        let bar = ProgressBar::new(schemas.len() as u64);
        bar.set_style(ProgressStyle::default_bar());
        bar
    });

    let mut artifacts = 0;
    for schema in &schemas {
        if let Some(bar) = &progress {
            bar.set_message(schema.name().to_owned());
        }
        let report = service.generate(schema, &base)?;
        info!(
            entity = %report.entity,
            artifacts = report.written.len(),
            "entity generated"
        );
        artifacts += report.written.len();
        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    let noun = if schemas.len() == 1 { "entity" } else { "entities" };
    output.success(&format!(
        "Generated {} artifact(s) for {} {} under {}",
        artifacts,
        schemas.len(),
        noun,
        base.display()
    ))?;

    Ok(())
}

// ── Entity selection ──────────────────────────────────────────────────────────

fn select_entities(
    manifest: &SchemaManifest,
    only: Option<&str>,
) -> CliResult<Vec<EntitySchema>> {
    match only {
        None => manifest.schemas(),
        Some(name) => {
            let decl = manifest
                .entities
                .iter()
                .find(|entity| entity.name.eq_ignore_ascii_case(name))
                .ok_or_else(|| CliError::EntityNotInManifest {
                    name: name.to_owned(),
                    available: manifest.entity_names(),
                })?;
            Ok(vec![decl.to_schema()?])
        }
    }
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn dry_run(schemas: &[EntitySchema], base: &Path, output: &OutputManager) -> CliResult<()> {
    let mut paths = Vec::new();
    for schema in schemas {
        let names = EntityNames::derive(schema.name());
        for kind in ArtifactKind::ALL {
            paths.push(base.join(kind.relative_path(&names)).display().to_string());
        }
    }

    if output.format() == OutputFormat::Json {
        let rendered = serde_json::to_string_pretty(&paths).map_err(|e| {
            CliError::Core(ForgeError::Internal {
                message: format!("failed to render JSON: {e}"),
            })
        })?;
        // Machine output goes straight to stdout, bypassing styling.
        println!("{rendered}");
        return Ok(());
    }

    output.header("Dry run - artifacts that would be written:")?;
    for path in &paths {
        output.print(&format!("  {path}"))?;
    }
    output.info(&format!("{} artifact(s), nothing written", paths.len()))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> SchemaManifest {
        toml::from_str(SchemaManifest::sample()).unwrap()
    }

    #[test]
    fn no_filter_selects_every_entity() {
        let schemas = select_entities(&manifest(), None).unwrap();
        assert_eq!(schemas.len(), 2);
    }

    #[test]
    fn filter_selects_one_entity_case_insensitively() {
        let schemas = select_entities(&manifest(), Some("mstcategory")).unwrap();
        assert_eq!(schemas.len(), 1);
        assert_eq!(schemas[0].name(), "Mstcategory");
    }

    #[test]
    fn unknown_filter_reports_available_entities() {
        let err = select_entities(&manifest(), Some("Gadget")).unwrap_err();
        match err {
            CliError::EntityNotInManifest { name, available } => {
                assert_eq!(name, "Gadget");
                assert!(available.contains(&"Mstproduct".to_owned()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
